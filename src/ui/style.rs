//! Page stylesheet: beige background, red accents, gold highlights

pub(crate) const CSS: &str = r#"
:root {
    --primary-red: #dc2626;
    --dark-red: #b91c1c;
    --accent-red: #ef4444;
    --beige-light: #fefaf0;
    --beige-medium: #fdf6e3;
    --beige-dark: #faf0d9;
    --gold: #d4af37;
    --light-gold: #fef3c7;
    --dark-text: #1f2937;
    --light-text: #6b7280;
    --card-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
    --hover-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif;
    color: var(--dark-text);
    background: linear-gradient(135deg, #fefaf0 0%, #fdf6e3 50%, #faf0d9 100%);
    min-height: 100vh;
    display: grid;
    grid-template-columns: 300px 1fr;
}

/* Sidebar */
aside {
    background: linear-gradient(135deg, #fdf6e3 0%, #faf0d9 50%, #f5e6c8 100%);
    padding: 20px;
    border-right: 1px solid #e5e7eb;
}

.sidebar-banner {
    background: linear-gradient(135deg, #dc2626, #b91c1c);
    color: white;
    padding: 25px;
    border-radius: 15px;
    text-align: center;
    margin-bottom: 25px;
    box-shadow: 0 6px 12px rgba(220, 38, 38, 0.3);
}

.sidebar-banner h3 { margin: 0; }
.sidebar-banner p { margin: 10px 0 0 0; font-size: 1rem; }

aside h4 { margin: 24px 0 10px 0; }

.nav-btn, .topic-btn {
    display: block;
    text-align: center;
    text-decoration: none;
    background: linear-gradient(135deg, #ffffff, #fef2f2);
    color: var(--primary-red);
    border: 2px solid var(--primary-red);
    padding: 10px 18px;
    border-radius: 50px;
    font-weight: 600;
    margin: 8px 0;
    transition: all 0.3s ease;
}

.nav-btn:hover, .topic-btn:hover, .nav-btn.active {
    background: linear-gradient(135deg, #dc2626, #b91c1c);
    color: white;
    transform: translateY(-2px);
    box-shadow: 0 8px 25px rgba(220, 38, 38, 0.4);
}

.topic-btn {
    border-color: var(--gold);
    color: #8a6d12;
    background: linear-gradient(135deg, #fffdf6, #fefaf0);
    font-weight: 500;
    font-size: 0.9rem;
}

.topic-btn:hover {
    background: linear-gradient(135deg, #d4af37, #b8941f);
}

.notice {
    padding: 14px 18px;
    border-radius: 10px;
    margin: 12px 0;
}

.notice.info { background: #eff6ff; border: 1px solid #bfdbfe; color: #1e40af; }
.notice.success { background: #ecfdf5; border: 1px solid #a7f3d0; color: #065f46; }
.notice.error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }

/* Main column */
main { padding: 2rem 3rem; }

.modern-header {
    background: linear-gradient(135deg, var(--primary-red) 0%, var(--dark-red) 100%);
    color: white;
    padding: 40px;
    text-align: center;
    border-radius: 24px;
    margin: 0 0 40px 0;
    box-shadow: var(--card-shadow);
}

.modern-header h1 { font-size: 2.5rem; margin: 0 0 15px 0; font-weight: 800; }
.modern-header .subtitle { margin: 0; opacity: 0.9; }

.metrics {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 20px;
    margin-bottom: 30px;
}

.metric {
    background: white;
    border-radius: 15px;
    padding: 20px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.08);
}

.metric .label { color: var(--light-text); font-size: 0.9rem; }
.metric .value { font-size: 2rem; font-weight: 700; margin: 6px 0; }
.metric .delta { color: #047857; font-size: 0.85rem; }

.tabs {
    display: flex;
    gap: 8px;
    border-bottom: 2px solid #e5e7eb;
    margin-bottom: 10px;
}

.tabs a {
    padding: 10px 20px;
    text-decoration: none;
    color: var(--light-text);
    border-bottom: 3px solid transparent;
    margin-bottom: -2px;
}

.tabs a.active {
    color: var(--primary-red);
    border-bottom-color: var(--primary-red);
    font-weight: 600;
}

.section-title {
    color: var(--primary-red);
    font-size: 2rem;
    margin: 30px 0 20px 0;
    border-bottom: 3px solid #e5e7eb;
    padding-bottom: 10px;
    font-weight: 700;
}

.filter-form { display: flex; gap: 12px; align-items: flex-end; margin-bottom: 20px; }
.filter-form select { min-width: 260px; min-height: 120px; padding: 6px; border-radius: 8px; }

.grid-2 {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
}

.project-card {
    background: linear-gradient(135deg, #fff, var(--beige-light));
    padding: 25px;
    border-radius: 15px;
    margin: 15px 0;
    border: 1px solid #e5e7eb;
    border-left: 5px solid var(--primary-red);
    box-shadow: 0 4px 15px rgba(0,0,0,0.08);
    transition: all 0.3s ease;
}

.project-card:hover {
    transform: translateY(-5px);
    box-shadow: var(--hover-shadow);
}

.project-card .description {
    background: #f8fafc;
    padding: 20px;
    border-radius: 10px;
    margin: 15px 0;
}

.project-card .achievement { color: var(--gold); font-weight: bold; }

.ideology-badge {
    display: inline-block;
    background: linear-gradient(135deg, var(--primary-red), var(--accent-red));
    color: white;
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 0.8rem;
    font-weight: 600;
    margin: 2px;
}

.empty-state { color: var(--light-text); font-style: italic; }

/* Charts */
.chart-card {
    background: white;
    border-radius: 15px;
    padding: 20px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.08);
}

.chart-card h3 { margin-top: 0; }
.chart { width: 100%; height: auto; }
.chart text.label { font-size: 12px; fill: var(--dark-text); }
.chart text.value { font-size: 12px; fill: var(--light-text); }

.legend { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 8px 16px; }
.legend .swatch { display: inline-block; width: 12px; height: 12px; border-radius: 3px; margin-right: 6px; }

.award-row { display: flex; justify-content: space-between; align-items: center; }
.award-year { font-size: 1.5rem; color: var(--primary-red); font-weight: bold; text-align: right; }
.award-year small { display: block; color: var(--light-text); font-size: 0.8rem; font-weight: normal; }

/* Submission form */
.submission-form label { display: block; font-weight: 600; margin: 12px 0 6px 0; }
.submission-form input[type=text], .submission-form select, .submission-form textarea {
    width: 100%;
    padding: 10px;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font-family: inherit;
}
.submission-form .required::after { content: " *"; color: var(--primary-red); }
.submission-form button {
    margin-top: 20px;
    width: 100%;
    padding: 14px;
    background: var(--primary-red);
    color: white;
    border: none;
    border-radius: 10px;
    font-size: 1.1rem;
    cursor: pointer;
}
.submission-form .hint { color: var(--light-text); font-size: 0.85rem; }

@media (max-width: 768px) {
    body { grid-template-columns: 1fr; }
    .grid-2, .metrics { grid-template-columns: 1fr; }
    .modern-header h1 { font-size: 2rem; }
}
"#;
