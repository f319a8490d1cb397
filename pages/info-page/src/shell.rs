//! Document shell and stylesheet for the info page.

use cgi_html::{HeadContent, Shell};

/// Build the shell wrapping all info-page sections.
pub fn create_shell() -> Shell {
    Shell::new(HeadContent::new("Rust CGI - System Info").with_style(PAGE_STYLES))
}

pub const PAGE_STYLES: &str = r#"
:root {
    --bg-primary: #0a0c10;
    --bg-secondary: #161b22;
    --bg-card: #21262d;
    --accent: #2ea043;
    --warning: #e3b341;
    --info: #58a6ff;
    --rust: #f74c00;
    --text-primary: #f0f6fc;
    --text-secondary: #8b949e;
    --border: #30363d;
    --shadow: 0 8px 24px rgba(0,0,0,0.2);
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    line-height: 1.6;
    min-height: 100vh;
    padding: 40px 20px;
}

.container { max-width: 900px; margin: 0 auto; }

.header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 40px;
    padding-bottom: 20px;
    border-bottom: 1px solid var(--border);
    flex-wrap: wrap;
    gap: 16px;
}

.logo-text {
    font-size: 24px;
    font-weight: 600;
    background: linear-gradient(45deg, #f74c00, #e3b341);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.language-badge {
    background: var(--bg-secondary);
    padding: 8px 16px;
    border-radius: 20px;
    font-size: 14px;
    border: 1px solid var(--border);
    display: flex;
    align-items: center;
    gap: 8px;
}

.language-tag {
    background: var(--rust);
    color: white;
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 12px;
    font-weight: 600;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 16px;
    margin-bottom: 24px;
}

.stat-card {
    background: var(--bg-secondary);
    border-radius: 12px;
    padding: 20px;
    border: 1px solid var(--border);
    box-shadow: var(--shadow);
}

.stat-title {
    color: var(--text-secondary);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 8px;
}

.stat-number {
    font-size: 24px;
    font-weight: 600;
    color: var(--rust);
    font-family: monospace;
}

.stat-server { font-size: 20px; color: var(--info); }
.stat-active { font-size: 20px; color: var(--accent); }

.card {
    background: var(--bg-secondary);
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 24px;
    border: 1px solid var(--border);
    box-shadow: var(--shadow);
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
    padding-bottom: 12px;
    border-bottom: 1px solid var(--border);
    flex-wrap: wrap;
    gap: 12px;
}

.card-title {
    font-size: 18px;
    font-weight: 600;
    color: var(--text-primary);
}

.info-table { width: 100%; border-collapse: collapse; }
.info-table tr { border-bottom: 1px solid var(--border); }
.info-table tr:last-child { border-bottom: none; }
.info-table td { padding: 12px 8px; color: var(--text-primary); }

.info-table td:first-child {
    color: var(--text-secondary);
    font-weight: 500;
    width: 40%;
    font-size: 14px;
}

.info-table td:last-child {
    font-family: 'SF Mono', Monaco, 'Roboto Mono', monospace;
    color: var(--rust);
}

.table-placeholder {
    color: var(--text-secondary) !important;
    text-align: center;
    padding: 20px !important;
}

.value-not-set {
    color: var(--text-secondary) !important;
    font-style: italic;
}

.value-info { color: var(--info) !important; }
.value-muted { color: var(--text-secondary) !important; }
.value-warning { color: var(--warning) !important; }

.alert {
    padding: 16px 20px;
    border-radius: 8px;
    margin-bottom: 24px;
    display: flex;
    align-items: center;
    gap: 12px;
}

.alert-info {
    background: rgba(88, 166, 255, 0.15);
    border: 1px solid var(--info);
    color: var(--info);
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 10px 20px;
    background: var(--bg-card);
    color: var(--text-primary);
    text-decoration: none;
    border-radius: 6px;
    border: 1px solid var(--border);
    font-size: 14px;
    font-weight: 500;
}

.btn:hover { background: var(--border); border-color: var(--text-secondary); }

.btn-group { display: flex; gap: 12px; flex-wrap: wrap; margin-top: 16px; }

.badge {
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 12px;
    font-weight: 500;
    display: inline-block;
}

.badge-rust {
    background: rgba(247, 76, 0, 0.2);
    color: var(--rust);
    border: 1px solid var(--rust);
}

.badge-cgi {
    background: rgba(46, 160, 67, 0.2);
    color: var(--accent);
    border: 1px solid var(--accent);
}

.footer {
    margin-top: 40px;
    padding-top: 20px;
    border-top: 1px solid var(--border);
    text-align: center;
    color: var(--text-secondary);
    font-size: 13px;
}

.footer-detail { margin-top: 8px; font-size: 12px; }

@media (max-width: 600px) {
    .header { flex-direction: column; align-items: start; }
    .stats-grid { grid-template-columns: 1fr; }
    .btn { width: 100%; }
}
"#;
