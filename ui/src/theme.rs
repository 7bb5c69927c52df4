pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f4f7f6;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.08);
  --border-strong: rgba(0, 0, 0, 0.16);
  --text: #16211c;
  --text-dim: #3e4f48;
  --text-muted: #6d7d76;
  --accent: #146133;
  --accent-strong: #0b4a25;
  --positive: #2c8a57;
  --warning: #d97706;
  --negative: #d64545;
  --overlay: rgba(10, 20, 15, 0.55);
  --shadow-soft: 0 10px 32px rgba(0, 0, 0, 0.14);
  --radius: 8px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Inter", "Helvetica Neue", system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: 14px;
  line-height: 1.45;
  min-height: 100%;
}

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-strong); }

.app-root { min-height: 100vh; display: flex; flex-direction: column; }

.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-3) var(--space-6);
  background: var(--accent);
  color: #ffffff;
  box-shadow: var(--shadow-soft);
}
.app-title { font-size: 18px; font-weight: 600; margin: 0; }
.app-nav { display: flex; gap: var(--space-4); }
.app-nav a { color: rgba(255, 255, 255, 0.85); font-weight: 500; }
.app-nav a.active, .app-nav a:hover { color: #ffffff; }

.app-main { flex: 1; padding: var(--space-6); }

.filter-bar {
  display: flex;
  flex-direction: row;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-3);
  padding: var(--space-3) var(--space-4);
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  margin-bottom: var(--space-6);
}
.filter-bar-controls { display: flex; flex-direction: row; gap: var(--space-3); flex-wrap: wrap; }
.filter-control { display: flex; flex-direction: column; gap: 4px; position: relative; }
.filter-control label { font-size: 11px; text-transform: uppercase; color: var(--text-muted); }
.filter-control select, .filter-control input {
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  padding: 6px 8px;
  background: var(--panel);
  color: var(--text);
}
.filter-dropdown summary {
  cursor: pointer;
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  padding: 6px 10px;
  user-select: none;
}
.filter-dropdown-list {
  position: absolute;
  z-index: 10;
  margin-top: 4px;
  padding: var(--space-2);
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  max-height: 260px;
  overflow-y: auto;
}
.filter-dropdown-list label {
  display: flex;
  gap: 6px;
  align-items: center;
  font-size: 13px;
  text-transform: none;
  color: var(--text-dim);
}
.filter-bar-suffix { display: flex; align-items: center; }
.download-link { font-weight: 600; white-space: nowrap; }

.summary-cards { display: flex; gap: var(--space-4); flex-wrap: wrap; margin-bottom: var(--space-6); }
.summary-card {
  flex: 1;
  min-width: 220px;
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-4);
}
.summary-card h3 { margin: 0 0 var(--space-2); font-size: 13px; color: var(--text-muted); }
.summary-card .metric { font-size: 26px; font-weight: 600; color: var(--accent-strong); }
.summary-card .unit { font-size: 12px; color: var(--text-muted); margin-left: 4px; }

.info-icon { cursor: help; color: var(--text-muted); margin-left: 6px; }

.intensity-panel {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-4);
  margin-bottom: var(--space-6);
}
.intensity-panel h3 { margin: 0 0 var(--space-2); font-size: 13px; color: var(--text-muted); }
.intensity-list { list-style: none; margin: 0; padding: 0; display: flex; flex-wrap: wrap; gap: var(--space-2) var(--space-4); }
.intensity-list li { display: flex; gap: 6px; font-size: 13px; }
.intensity-region { color: var(--text-dim); font-weight: 500; }
.intensity-value { color: var(--text-muted); }

.data-table { width: 100%; border-collapse: collapse; background: var(--panel); }
.data-table th, .data-table td {
  text-align: left;
  padding: var(--space-2) var(--space-3);
  border-bottom: 1px solid var(--border);
}
.data-table th { font-size: 12px; text-transform: uppercase; color: var(--text-muted); }
.data-table tr:hover td { background: rgba(20, 97, 51, 0.05); }

.status-note { color: var(--text-muted); padding: var(--space-4) 0; }
.status-error { color: var(--negative); padding: var(--space-4) 0; }

.warning-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}
.warning-modal {
  background: var(--panel);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: var(--space-6);
  max-width: 420px;
  text-align: center;
}
.warning-modal h2 { margin-top: 0; }
.warning-modal button {
  margin-top: var(--space-4);
  padding: 8px 20px;
  border: none;
  border-radius: var(--radius);
  background: var(--accent);
  color: #ffffff;
  font-weight: 600;
  cursor: pointer;
}
.warning-modal button:hover { background: var(--accent-strong); }
"#;
