pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MyDay</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #050505;
      --ink: #f4f4f2;
      --muted: #9a978f;
      --border: rgba(244, 244, 242, 0.14);
      --card: #101012;
      --card-soft: rgba(244, 244, 242, 0.04);
      --accent: #f4f4f2;
      --danger: #e5533d;
      --shadow: 0 18px 48px rgba(0, 0, 0, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      justify-content: center;
      padding: 28px 16px 96px;
    }

    .app {
      width: min(640px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      display: grid;
      gap: 4px;
    }

    .eyebrow {
      margin: 0;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      color: var(--muted);
    }

    h1 {
      margin: 0;
      font-size: 1.9rem;
      font-weight: 600;
      letter-spacing: -0.02em;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 14px;
      box-shadow: var(--shadow);
    }

    .card h2 {
      margin: 0;
      font-size: 1.15rem;
      font-weight: 600;
    }

    .card .subtitle {
      margin: 2px 0 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .day-nav {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .chev {
      flex: none;
      width: 40px;
      height: 40px;
      border: 1px solid var(--border);
      border-radius: 12px;
      background: transparent;
      color: var(--muted);
      font-size: 1rem;
      cursor: pointer;
    }

    .chev:hover {
      color: var(--ink);
    }

    .chev:disabled {
      opacity: 0.35;
      cursor: default;
    }

    .day-row {
      flex: 1;
      display: flex;
      justify-content: space-between;
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 4px;
    }

    .day-cell {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 2px;
      border: none;
      border-radius: 10px;
      background: transparent;
      color: var(--muted);
      padding: 6px 8px;
      font-size: 0.7rem;
      font-weight: 600;
      cursor: pointer;
    }

    .day-cell .dom {
      font-size: 0.65rem;
      opacity: 0.8;
    }

    .day-cell.active {
      background: var(--ink);
      color: #050505;
    }

    .task-list {
      list-style: none;
      margin: 0;
      padding: 0;
      border: 1px solid var(--border);
      border-radius: 14px;
      background: var(--card-soft);
      overflow: hidden;
    }

    .task-list li {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 12px 14px;
      border-top: 1px solid var(--border);
      cursor: pointer;
      user-select: none;
      -webkit-user-select: none;
    }

    .task-list li:first-child {
      border-top: none;
    }

    .task-list input[type="checkbox"] {
      width: 18px;
      height: 18px;
      accent-color: var(--ink);
      pointer-events: none;
    }

    .task-title {
      font-size: 1rem;
      font-weight: 500;
    }

    li.done .task-title {
      color: var(--muted);
      text-decoration: line-through;
    }

    .tag {
      margin-left: auto;
      font-size: 0.65rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
      border: 1px solid var(--border);
      border-radius: 999px;
      padding: 3px 8px;
    }

    .empty {
      padding: 36px 16px;
      text-align: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 10px;
    }

    .stat {
      border: 1px solid var(--border);
      border-radius: 12px;
      background: var(--card-soft);
      padding: 10px 12px;
      display: grid;
      gap: 4px;
    }

    .stat .label {
      font-size: 0.65rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.3rem;
      font-weight: 600;
    }

    .chart-card .badge {
      justify-self: start;
      font-size: 0.7rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
      border: 1px solid var(--border);
      border-radius: 999px;
      padding: 3px 10px;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
      border: 1px solid var(--border);
      border-radius: 12px;
      background: var(--card-soft);
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 1.8;
    }

    .chart-grid {
      stroke: rgba(244, 244, 242, 0.1);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .fab {
      position: fixed;
      right: 22px;
      bottom: 22px;
      width: 60px;
      height: 60px;
      border: none;
      border-radius: 999px;
      background: var(--ink);
      color: #050505;
      font-size: 1.8rem;
      line-height: 1;
      cursor: pointer;
      box-shadow: 0 14px 36px rgba(244, 244, 242, 0.25);
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.72);
      display: flex;
      align-items: flex-start;
      justify-content: center;
      padding: 60px 16px 40px;
      z-index: 20;
    }

    .overlay.hidden {
      display: none;
    }

    .dialog {
      width: min(420px, 100%);
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 12px;
      box-shadow: var(--shadow);
    }

    .dialog-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .dialog h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    .dialog .muted {
      margin: 0;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .dialog input[type="text"] {
      width: 100%;
      border: 1px solid var(--border);
      border-radius: 10px;
      background: transparent;
      color: var(--ink);
      font: inherit;
      padding: 10px 12px;
    }

    .dialog input[type="text"]:focus {
      outline: 1px solid var(--ink);
    }

    .switch-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .switch-row input[type="checkbox"] {
      width: 18px;
      height: 18px;
      accent-color: var(--ink);
    }

    .btn {
      border: 1px solid var(--border);
      border-radius: 10px;
      background: transparent;
      color: var(--ink);
      font: inherit;
      font-weight: 600;
      padding: 10px 14px;
      cursor: pointer;
    }

    .btn.primary {
      background: var(--ink);
      border-color: var(--ink);
      color: #050505;
    }

    .btn.danger {
      background: var(--danger);
      border-color: var(--danger);
      color: #fff;
    }

    .btn:disabled {
      opacity: 0.4;
      cursor: default;
    }

    .btn-row {
      display: flex;
      gap: 8px;
    }

    .btn-row .btn {
      flex: 1;
    }

    .btn-close {
      width: 34px;
      height: 34px;
      border: 1px solid var(--border);
      border-radius: 10px;
      background: transparent;
      color: var(--muted);
      font-size: 1rem;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    @media (max-width: 480px) {
      .stat-grid {
        grid-template-columns: repeat(2, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <p class="eyebrow">Hi, here are the tasks for the day</p>
      <h1>MyDay</h1>
    </header>

    <section class="card">
      <div>
        <h2 id="selected-label">Today</h2>
        <p class="subtitle">Daily list</p>
      </div>
      <div class="day-nav">
        <button class="chev" id="prev" type="button" aria-label="Previous 7 days">&#8249;</button>
        <div class="day-row" id="day-row"></div>
        <button class="chev" id="next" type="button" aria-label="Next 7 days" disabled>&#8250;</button>
      </div>
      <ul class="task-list" id="task-list"></ul>
    </section>

    <section class="card">
      <div>
        <h2>Day status</h2>
        <p class="subtitle" id="status-date"></p>
      </div>
      <div class="stat-grid">
        <div class="stat">
          <span class="label">Total</span>
          <span class="value" id="stat-total">0</span>
        </div>
        <div class="stat">
          <span class="label">Done</span>
          <span class="value" id="stat-done">0</span>
        </div>
        <div class="stat">
          <span class="label">Recurring</span>
          <span class="value" id="stat-recurring">0</span>
        </div>
        <div class="stat">
          <span class="label">Completion</span>
          <span class="value" id="stat-completion">0%</span>
        </div>
      </div>
    </section>

    <section class="card chart-card">
      <div>
        <h2>Completed per day</h2>
        <span class="badge">Last 7 days</span>
      </div>
      <svg id="chart" viewBox="0 0 600 220" aria-label="Tasks completed line chart for the last seven days" role="img"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <button class="fab" id="add-open" type="button" aria-label="Add task">+</button>

  <div class="overlay hidden" id="add-dialog">
    <div class="dialog">
      <div class="dialog-head">
        <h2>New task</h2>
        <button class="btn-close" id="add-close" type="button" aria-label="Close">&#215;</button>
      </div>
      <input type="text" id="task-title" placeholder="Task title" autocomplete="off" />
      <label class="switch-row">
        <span>Recurring</span>
        <input type="checkbox" id="task-recurring" checked />
      </label>
      <button class="btn primary" id="task-save" type="button" disabled>Save</button>
    </div>
  </div>

  <div class="overlay hidden" id="delete-dialog">
    <div class="dialog">
      <h2>Delete task?</h2>
      <p class="muted" id="delete-title"></p>
      <div class="btn-row">
        <button class="btn" id="delete-cancel" type="button">Cancel</button>
        <button class="btn danger" id="delete-confirm" type="button">Delete</button>
      </div>
    </div>
  </div>

  <script>
    const dayRowEl = document.getElementById('day-row');
    const prevEl = document.getElementById('prev');
    const nextEl = document.getElementById('next');
    const selectedLabelEl = document.getElementById('selected-label');
    const taskListEl = document.getElementById('task-list');
    const statusDateEl = document.getElementById('status-date');
    const statTotalEl = document.getElementById('stat-total');
    const statDoneEl = document.getElementById('stat-done');
    const statRecurringEl = document.getElementById('stat-recurring');
    const statCompletionEl = document.getElementById('stat-completion');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const addOpenEl = document.getElementById('add-open');
    const addDialogEl = document.getElementById('add-dialog');
    const addCloseEl = document.getElementById('add-close');
    const taskTitleEl = document.getElementById('task-title');
    const taskRecurringEl = document.getElementById('task-recurring');
    const taskSaveEl = document.getElementById('task-save');
    const deleteDialogEl = document.getElementById('delete-dialog');
    const deleteTitleEl = document.getElementById('delete-title');
    const deleteCancelEl = document.getElementById('delete-cancel');
    const deleteConfirmEl = document.getElementById('delete-confirm');

    let selectedDay = '{{TODAY}}';
    let weekOffset = 0;
    let pendingDelete = null;
    let holdTimer = null;
    const HOLD_MS = 550;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatDayHeading = (key) => {
      const date = new Date(key);
      return date.toLocaleDateString('en', {
        weekday: 'short',
        month: 'short',
        day: 'numeric',
        timeZone: 'UTC'
      });
    };

    const renderDayRow = (days) => {
      dayRowEl.innerHTML = '';
      days.forEach((cell) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'day-cell' + (cell.key === selectedDay ? ' active' : '');
        button.setAttribute('aria-label', cell.key);

        const label = document.createElement('span');
        label.textContent = cell.label;
        const dom = document.createElement('span');
        dom.className = 'dom';
        dom.textContent = cell.day;

        button.append(label, dom);
        button.addEventListener('click', () => {
          selectedDay = cell.key;
          renderDayRow(days);
          loadDay().catch((err) => setStatus(err.message, 'error'));
        });
        dayRowEl.appendChild(button);
      });
      selectedLabelEl.textContent = formatDayHeading(selectedDay);
    };

    const clearHold = () => {
      if (holdTimer) {
        clearTimeout(holdTimer);
        holdTimer = null;
      }
    };

    const startHold = (task) => {
      clearHold();
      holdTimer = setTimeout(() => {
        pendingDelete = task;
        deleteTitleEl.textContent = task.title;
        deleteDialogEl.classList.remove('hidden');
      }, HOLD_MS);
    };

    const renderDay = (view) => {
      statusDateEl.textContent = view.date;
      statTotalEl.textContent = view.summary.total;
      statDoneEl.textContent = view.summary.done;
      statRecurringEl.textContent = view.summary.recurring;
      statCompletionEl.textContent = view.summary.completion_pct + '%';

      taskListEl.innerHTML = '';
      if (view.tasks.length === 0) {
        const empty = document.createElement('li');
        empty.className = 'empty';
        empty.textContent = 'No tasks yet.';
        taskListEl.appendChild(empty);
        return;
      }

      view.tasks.forEach((task) => {
        const item = document.createElement('li');
        if (task.done) {
          item.classList.add('done');
        }

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.done;
        checkbox.setAttribute(
          'aria-label',
          'Mark ' + task.title + ' as ' + (task.done ? 'incomplete' : 'done')
        );

        const title = document.createElement('span');
        title.className = 'task-title';
        title.textContent = task.title;

        item.append(checkbox, title);
        if (task.recurring) {
          const tag = document.createElement('span');
          tag.className = 'tag';
          tag.textContent = 'daily';
          item.appendChild(tag);
        }

        item.addEventListener('pointerdown', () => startHold(task));
        item.addEventListener('pointerup', clearHold);
        item.addEventListener('pointerleave', clearHold);
        item.addEventListener('pointercancel', clearHold);
        item.addEventListener('click', () => {
          if (pendingDelete) {
            return;
          }
          toggleTask(task.id).catch((err) => setStatus(err.message, 'error'));
        });
        taskListEl.appendChild(item);
      });
    };

    const renderTrend = (points) => {
      const width = 600;
      const height = 220;
      const paddingX = 40;
      const paddingY = 32;
      const top = 20;

      const values = points.map((point) => point.count);
      const max = Math.max(1, ...values);
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / max;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - value * scaleY;

      const path = points
        .map((point, index) => (index === 0 ? 'M' : 'L') + ' ' + x(index).toFixed(2) + ' ' + y(point.count).toFixed(2))
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos + '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) + '" text-anchor="end">' + Math.round(value * 10) / 10 + '</text>';
      }

      const xLabels = points
        .map((point, index) => '<text class="chart-label" x="' + x(index) + '" y="' + (height - paddingY + 18) + '" text-anchor="middle">' + point.label + '</text>')
        .join('');

      const circles = points
        .map((point, index) => '<circle class="chart-point" cx="' + x(index) + '" cy="' + y(point.count) + '" r="3.5" />')
        .join('');

      chartEl.innerHTML = grid + '<path class="chart-line" d="' + path + '" />' + circles + xLabels;
    };

    const loadDay = async () => {
      const res = await fetch('/api/day?date=' + encodeURIComponent(selectedDay));
      if (!res.ok) {
        throw new Error('Unable to load the day');
      }
      renderDay(await res.json());
    };

    const loadWindow = async () => {
      const params = 'offset=' + weekOffset + '&selected=' + encodeURIComponent(selectedDay);
      const res = await fetch('/api/window?' + params);
      if (!res.ok) {
        throw new Error('Unable to load the week');
      }
      const data = await res.json();
      weekOffset = data.offset;
      selectedDay = data.selected;
      nextEl.disabled = weekOffset === 0;
      renderDayRow(data.days);
      await loadDay();
    };

    const loadTrend = async () => {
      const res = await fetch('/api/trend');
      if (!res.ok) {
        throw new Error('Unable to load the trend');
      }
      const data = await res.json();
      renderTrend(data.points);
    };

    const toggleTask = async (id) => {
      const res = await fetch('/api/tasks/' + encodeURIComponent(id) + '/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: selectedDay })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      renderDay(await res.json());
      loadTrend().catch((err) => setStatus(err.message, 'error'));
    };

    const addTask = async () => {
      const title = taskTitleEl.value.trim();
      if (!title) {
        return;
      }
      const res = await fetch('/api/tasks', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ title, recurring: taskRecurringEl.checked })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      closeAddDialog();
      await loadDay();
      loadTrend().catch((err) => setStatus(err.message, 'error'));
    };

    const deleteTask = async (id) => {
      const res = await fetch('/api/tasks/' + encodeURIComponent(id), { method: 'DELETE' });
      if (!res.ok) {
        throw new Error('Unable to delete the task');
      }
      await loadDay();
      loadTrend().catch((err) => setStatus(err.message, 'error'));
    };

    const openAddDialog = () => {
      addDialogEl.classList.remove('hidden');
      taskTitleEl.focus();
    };

    const closeAddDialog = () => {
      addDialogEl.classList.add('hidden');
      taskTitleEl.value = '';
      taskRecurringEl.checked = true;
      taskSaveEl.disabled = true;
    };

    const closeDeleteDialog = () => {
      deleteDialogEl.classList.add('hidden');
      pendingDelete = null;
    };

    prevEl.addEventListener('click', () => {
      weekOffset += 7;
      loadWindow().catch((err) => setStatus(err.message, 'error'));
    });

    nextEl.addEventListener('click', () => {
      weekOffset = Math.max(0, weekOffset - 7);
      loadWindow().catch((err) => setStatus(err.message, 'error'));
    });

    addOpenEl.addEventListener('click', openAddDialog);
    addCloseEl.addEventListener('click', closeAddDialog);

    taskTitleEl.addEventListener('input', () => {
      taskSaveEl.disabled = taskTitleEl.value.trim() === '';
    });

    taskTitleEl.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        event.preventDefault();
        addTask().catch((err) => setStatus(err.message, 'error'));
      }
    });

    taskSaveEl.addEventListener('click', () => {
      addTask().catch((err) => setStatus(err.message, 'error'));
    });

    deleteCancelEl.addEventListener('click', closeDeleteDialog);

    deleteConfirmEl.addEventListener('click', () => {
      const task = pendingDelete;
      closeDeleteDialog();
      if (task) {
        deleteTask(task.id).catch((err) => setStatus(err.message, 'error'));
      }
    });

    Promise.all([loadWindow(), loadTrend()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
