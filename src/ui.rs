use crate::calendar::progress_percent;

pub fn render_index(date: &str, total: u64, goal: u64) -> String {
    let percent = progress_percent(total, goal);
    INDEX_HTML
        .replace("{{TODAY}}", date)
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{GOAL}}", &goal.to_string())
        .replace("{{PERCENT}}", &percent.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HydroFlow</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Manrope:wght@400;500;600;700&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7fd;
      --bg-2: #bae6fd;
      --ink: #0c4a6e;
      --accent: #0ea5e9;
      --accent-deep: #0369a1;
      --accent-soft: #e0f2fe;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(3, 105, 161, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #dbeffc 60%, #f0f9ff 100%);
      color: var(--ink);
      font-family: "Manrope", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-start;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #64748b;
      font-size: 0.95rem;
    }

    .goal {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .goal-pill {
      background: var(--accent-soft);
      color: var(--accent-deep);
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      font-size: 0.9rem;
    }

    .goal-form {
      display: flex;
      align-items: center;
      gap: 6px;
    }

    .goal-form input {
      width: 90px;
      border: 1px solid rgba(3, 105, 161, 0.25);
      border-radius: 10px;
      padding: 8px 10px;
      font: inherit;
      color: var(--ink);
    }

    .btn-ghost {
      background: transparent;
      border: 1px solid rgba(3, 105, 161, 0.25);
      border-radius: 999px;
      padding: 7px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--accent-deep);
      cursor: pointer;
      box-shadow: none;
    }

    .day-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .day-heading {
      text-align: center;
      display: grid;
      gap: 2px;
    }

    .day-heading h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .btn-nav {
      background: white;
      border: 1px solid rgba(3, 105, 161, 0.12);
      border-radius: 14px;
      width: 42px;
      height: 42px;
      font-size: 1.3rem;
      color: var(--accent-deep);
      cursor: pointer;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(3, 105, 161, 0.08);
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .ring-card {
      justify-items: center;
    }

    .ring-wrap {
      position: relative;
      width: 200px;
      height: 200px;
    }

    .ring {
      width: 100%;
      height: 100%;
      transform: rotate(-90deg);
    }

    .ring circle {
      fill: none;
      stroke-width: 14;
    }

    .ring-track {
      stroke: #e0f2fe;
    }

    .ring-fill {
      stroke: #0ea5e9;
      stroke-dasharray: 502.65;
      stroke-dashoffset: 502.65;
      stroke-linecap: round;
      transition: stroke-dashoffset 400ms ease;
    }

    .ring-center {
      position: absolute;
      inset: 0;
      display: grid;
      place-content: center;
      text-align: center;
      gap: 2px;
    }

    .total {
      font-size: 2.2rem;
      font-weight: 700;
    }

    .goal-line {
      color: #64748b;
      font-size: 0.9rem;
    }

    .percent {
      color: var(--accent);
      font-weight: 600;
      font-size: 0.95rem;
    }

    .badge {
      background: var(--accent);
      color: white;
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .history {
      list-style: none;
      margin: 0;
      padding: 0;
      width: 100%;
      display: grid;
      gap: 8px;
      max-height: 220px;
      overflow-y: auto;
    }

    .history li {
      display: flex;
      justify-content: space-between;
      background: #f0f9ff;
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 0.95rem;
    }

    .history li.empty {
      justify-content: center;
      color: #64748b;
    }

    .history-time {
      color: #64748b;
    }

    .preset-grid {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 10px;
    }

    .preset {
      position: relative;
    }

    .preset-add {
      width: 100%;
      background: var(--accent-soft);
      border: none;
      border-radius: 14px;
      padding: 16px 10px;
      font-size: 1rem;
      font-weight: 600;
      color: var(--accent-deep);
      cursor: pointer;
      transition: transform 150ms ease;
    }

    .preset-add:active {
      transform: scale(0.97);
    }

    .preset-remove {
      position: absolute;
      top: -6px;
      right: -6px;
      width: 22px;
      height: 22px;
      border: none;
      border-radius: 50%;
      background: var(--accent-deep);
      color: white;
      font-size: 0.8rem;
      line-height: 1;
      cursor: pointer;
    }

    #custom-form {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    #custom-form input {
      flex: 1;
      min-width: 140px;
      border: 1px solid rgba(3, 105, 161, 0.2);
      border-radius: 14px;
      padding: 12px 14px;
      font: inherit;
      color: var(--ink);
    }

    .btn-drink {
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 14px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      box-shadow: 0 10px 24px rgba(14, 165, 233, 0.3);
    }

    .cal-head {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 8px;
    }

    .cal-week,
    .cal-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .cal-week span {
      text-align: center;
      font-size: 0.75rem;
      font-weight: 700;
      color: #94a3b8;
    }

    .cal-cell {
      position: relative;
      aspect-ratio: 1;
      border: none;
      border-radius: 10px;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--ink);
      cursor: pointer;
    }

    .cal-blank {
      background: transparent;
      cursor: default;
    }

    .tier-empty {
      background: #f8fafc;
      color: #94a3b8;
    }

    .tier-low {
      background: #e0f2fe;
    }

    .tier-medium {
      background: #7dd3fc;
    }

    .tier-high {
      background: #38bdf8;
      color: white;
    }

    .tier-goal-met {
      background: #0ea5e9;
      color: white;
    }

    .cal-cell.cal-selected {
      outline: 2px solid #0369a1;
      outline-offset: 1px;
    }

    .cal-cell.cal-today::after {
      content: '';
      position: absolute;
      bottom: 4px;
      left: 50%;
      transform: translateX(-50%);
      width: 4px;
      height: 4px;
      border-radius: 50%;
      background: currentColor;
    }

    .status {
      font-size: 0.95rem;
      color: #64748b;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .preset-grid {
        grid-template-columns: repeat(2, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>HydroFlow</h1>
        <p class="subtitle">Stay hydrated, stay healthy.</p>
      </div>
      <div class="goal">
        <span id="goal-view" class="goal-pill">Goal: {{GOAL}} ml</span>
        <button type="button" id="goal-edit" class="btn-ghost">Edit</button>
        <form id="goal-form" class="goal-form hidden">
          <input id="goal-input" type="number" min="1" aria-label="Daily goal in ml" />
          <button type="submit" class="btn-ghost">Save</button>
          <button type="button" id="goal-cancel" class="btn-ghost">Cancel</button>
        </form>
      </div>
    </header>

    <section class="day-nav">
      <button type="button" id="prev-day" class="btn-nav" aria-label="Previous day">&lsaquo;</button>
      <div class="day-heading">
        <h2 id="day-name"></h2>
        <p id="day-date" class="subtitle"></p>
      </div>
      <button type="button" id="next-day" class="btn-nav" aria-label="Next day">&rsaquo;</button>
    </section>

    <section class="card ring-card">
      <div id="ring-wrap" class="ring-wrap">
        <svg class="ring" viewBox="0 0 200 200" role="img" aria-label="Daily progress">
          <circle class="ring-track" cx="100" cy="100" r="80"></circle>
          <circle id="ring-fill" class="ring-fill" cx="100" cy="100" r="80"></circle>
        </svg>
        <div class="ring-center">
          <span id="total" class="total">{{TOTAL}}</span>
          <span id="goal-line" class="goal-line">/ {{GOAL}} ml</span>
          <span id="percent" class="percent">{{PERCENT}}%</span>
        </div>
      </div>
      <div id="goal-badge" class="badge hidden">Goal met!</div>
      <button type="button" id="history-toggle" class="btn-ghost">History</button>
      <ul id="history" class="history hidden"></ul>
    </section>

    <section class="card">
      <h2>Log a drink</h2>
      <div id="presets" class="preset-grid"></div>
      <form id="custom-form">
        <input id="custom-input" type="number" min="1" placeholder="Custom amount (ml)" />
        <button type="submit" class="btn-drink">Drink</button>
        <button type="button" id="save-preset" class="btn-ghost hidden">Save preset</button>
      </form>
    </section>

    <section class="card">
      <div class="cal-head">
        <h2>Monthly Overview</h2>
        <p id="cal-month" class="subtitle"></p>
      </div>
      <div class="cal-week">
        <span>S</span><span>M</span><span>T</span><span>W</span><span>T</span><span>F</span><span>S</span>
      </div>
      <div id="calendar" class="cal-grid"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const goalViewEl = document.getElementById('goal-view');
    const goalEditBtn = document.getElementById('goal-edit');
    const goalForm = document.getElementById('goal-form');
    const goalInput = document.getElementById('goal-input');
    const goalCancelBtn = document.getElementById('goal-cancel');
    const prevBtn = document.getElementById('prev-day');
    const nextBtn = document.getElementById('next-day');
    const dayNameEl = document.getElementById('day-name');
    const dayDateEl = document.getElementById('day-date');
    const totalEl = document.getElementById('total');
    const goalLineEl = document.getElementById('goal-line');
    const percentEl = document.getElementById('percent');
    const ringFillEl = document.getElementById('ring-fill');
    const ringWrapEl = document.getElementById('ring-wrap');
    const goalBadgeEl = document.getElementById('goal-badge');
    const historyToggle = document.getElementById('history-toggle');
    const historyEl = document.getElementById('history');
    const presetsEl = document.getElementById('presets');
    const customForm = document.getElementById('custom-form');
    const customInput = document.getElementById('custom-input');
    const savePresetBtn = document.getElementById('save-preset');
    const calMonthEl = document.getElementById('cal-month');
    const calendarEl = document.getElementById('calendar');
    const statusEl = document.getElementById('status');

    const RING_LEN = 502.65;

    let selected = '{{TODAY}}';
    let currentGoal = {{GOAL}};
    let customPresets = [];
    let dayData = null;
    let showHistory = false;

    const pad2 = (value) => String(value).padStart(2, '0');

    const toDate = (id) => {
      const [year, month, day] = id.split('-').map(Number);
      return new Date(year, month - 1, day);
    };

    const toId = (date) =>
      `${date.getFullYear()}-${pad2(date.getMonth() + 1)}-${pad2(date.getDate())}`;

    const formatTime = (iso) => {
      const stamp = new Date(iso);
      return `${pad2(stamp.getHours())}:${pad2(stamp.getMinutes())}`;
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const send = (method, url, body) =>
      request(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const renderDayHeading = () => {
      const date = toDate(selected);
      dayNameEl.textContent = date.toLocaleDateString(undefined, { weekday: 'long' });
      dayDateEl.textContent = date.toLocaleDateString(undefined, {
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });
      calMonthEl.textContent = date.toLocaleDateString(undefined, {
        month: 'long',
        year: 'numeric'
      });
    };

    const renderHistory = (entries) => {
      if (!entries.length) {
        historyEl.innerHTML = '<li class="empty">No water logs yet.</li>';
        return;
      }
      historyEl.innerHTML = entries
        .slice()
        .reverse()
        .map(
          (entry) =>
            `<li><span>${entry.amount} ml</span><span class="history-time">${formatTime(entry.timestamp)}</span></li>`
        )
        .join('');
    };

    const renderCard = () => {
      ringWrapEl.classList.toggle('hidden', showHistory);
      goalBadgeEl.classList.toggle('hidden', showHistory || !dayData || !dayData.goal_met);
      historyEl.classList.toggle('hidden', !showHistory);
      historyToggle.textContent = showHistory ? 'Back' : 'History';
    };

    const renderDay = (data) => {
      dayData = data;
      currentGoal = data.goal;
      totalEl.textContent = data.total;
      goalLineEl.textContent = `/ ${data.goal} ml`;
      percentEl.textContent = `${data.percent}%`;
      ringFillEl.style.strokeDashoffset = (RING_LEN * (1 - data.percent / 100)).toFixed(2);
      goalViewEl.textContent = `Goal: ${data.goal} ml`;
      renderHistory(data.entries);
      renderCard();
    };

    const renderPresets = (data) => {
      customPresets = data.custom;
      presetsEl.innerHTML = data.merged
        .map((amount) => {
          const remove = customPresets.includes(amount)
            ? `<button type="button" class="preset-remove" data-remove="${amount}" aria-label="Remove preset">&times;</button>`
            : '';
          return `<div class="preset"><button type="button" class="preset-add" data-amount="${amount}">${amount} ml</button>${remove}</div>`;
        })
        .join('');
    };

    const renderCalendar = (data) => {
      calendarEl.innerHTML = data.cells
        .map((cell) => {
          if (!cell) {
            return '<span class="cal-cell cal-blank"></span>';
          }
          const classes = ['cal-cell', `tier-${cell.tier}`];
          if (cell.date === selected) {
            classes.push('cal-selected');
          }
          if (cell.today) {
            classes.push('cal-today');
          }
          return `<button type="button" class="${classes.join(' ')}" data-date="${cell.date}" title="${cell.total} ml">${cell.day}</button>`;
        })
        .join('');
    };

    const loadDay = async () => {
      renderDay(await request(`/api/day/${selected}`));
    };

    const loadPresets = async () => {
      renderPresets(await request('/api/presets'));
    };

    const loadCalendar = async () => {
      const [year, month] = selected.split('-').map(Number);
      renderCalendar(await request(`/api/calendar/${year}/${month}`));
    };

    const refresh = async () => {
      await Promise.all([loadDay(), loadPresets(), loadCalendar()]);
    };

    const selectDate = (id) => {
      selected = id;
      renderDayHeading();
      Promise.all([loadDay(), loadCalendar()]).catch((err) => setStatus(err.message, 'error'));
    };

    const shiftDay = (delta) => {
      const date = toDate(selected);
      date.setDate(date.getDate() + delta);
      selectDate(toId(date));
    };

    const drink = async (amount) => {
      setStatus('Saving...', 'info');
      renderDay(await send('POST', '/api/drink', { date: selected, amount }));
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const addPreset = async (candidate) => {
      renderPresets(await send('POST', '/api/presets', { amount: candidate }));
    };

    const removePreset = async (amount) => {
      renderPresets(await request(`/api/presets/${amount}`, { method: 'DELETE' }));
    };

    goalEditBtn.addEventListener('click', () => {
      goalInput.value = currentGoal;
      goalForm.classList.remove('hidden');
      goalViewEl.classList.add('hidden');
      goalEditBtn.classList.add('hidden');
      goalInput.focus();
    });

    const closeGoalEditor = () => {
      goalForm.classList.add('hidden');
      goalViewEl.classList.remove('hidden');
      goalEditBtn.classList.remove('hidden');
    };

    goalCancelBtn.addEventListener('click', closeGoalEditor);

    goalForm.addEventListener('submit', (event) => {
      event.preventDefault();
      send('PUT', '/api/goal', { goal: goalInput.value.trim() })
        .then(() => {
          closeGoalEditor();
          return Promise.all([loadDay(), loadCalendar()]);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    prevBtn.addEventListener('click', () => shiftDay(-1));
    nextBtn.addEventListener('click', () => shiftDay(1));

    historyToggle.addEventListener('click', () => {
      showHistory = !showHistory;
      renderCard();
    });

    presetsEl.addEventListener('click', (event) => {
      const removeTarget = event.target.closest('[data-remove]');
      if (removeTarget) {
        removePreset(removeTarget.dataset.remove).catch((err) => setStatus(err.message, 'error'));
        return;
      }
      const addTarget = event.target.closest('[data-amount]');
      if (addTarget) {
        drink(Number(addTarget.dataset.amount)).catch((err) => setStatus(err.message, 'error'));
      }
    });

    customInput.addEventListener('input', () => {
      savePresetBtn.classList.toggle('hidden', customInput.value.trim() === '');
    });

    customForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const parsed = parseInt(customInput.value, 10);
      if (Number.isNaN(parsed)) {
        return;
      }
      customInput.value = '';
      savePresetBtn.classList.add('hidden');
      if (parsed > 0) {
        drink(parsed).catch((err) => setStatus(err.message, 'error'));
      }
    });

    savePresetBtn.addEventListener('click', () => {
      const candidate = customInput.value.trim();
      if (candidate === '') {
        return;
      }
      addPreset(candidate)
        .then(() => {
          customInput.value = '';
          savePresetBtn.classList.add('hidden');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    calendarEl.addEventListener('click', (event) => {
      const target = event.target.closest('[data-date]');
      if (target) {
        selectDate(target.dataset.date);
      }
    });

    renderDayHeading();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
