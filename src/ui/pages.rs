//! HTML page generation
//!
//! The page is assembled from plain `format!` fragments. Every catalog string
//! and every echoed form value goes through `escape_html`.

use std::fmt::Write;

use crate::catalog::{AwardSummary, Catalog, ProjectRecord};
use crate::filter::filter_projects;
use crate::submission::{RequiredField, SubmissionDraft, SubmissionOutcome};
use crate::view_state::{Tab, ViewState};

use super::charts::{BarChart, PieChart};
use super::escape_html;
use super::style::CSS;

/// Path the showcase page is mounted at
pub const SHOWCASE_PATH: &str = "/showcase";
/// Path the submission form posts to
pub const SUBMIT_PATH: &str = "/showcase/submit";

/// A form submission handled in the current request
#[derive(Debug, Clone, Copy)]
pub struct SubmissionView<'a> {
    pub draft: &'a SubmissionDraft,
    pub outcome: &'a SubmissionOutcome,
}

/// Full showcase page for one viewer.
///
/// `submission` is shown inline on the submit tab and then discarded. A
/// rejected draft is written back into the form so it can be corrected.
pub fn showcase_page(
    catalog: &Catalog,
    view: &ViewState,
    submission: Option<SubmissionView<'_>>,
) -> String {
    let page = catalog.page();
    let body = match view.tab {
        Tab::Works => works_tab(catalog, view),
        Tab::Analysis => analysis_tab(catalog),
        Tab::Submit => submit_tab(catalog, view, submission),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    {sidebar}
    <main>
        <header class="modern-header">
            <h1>{icon} {title}</h1>
            <p class="subtitle">{subtitle}</p>
        </header>
        {metrics}
        {tabs}
        <section class="tab-body" id="tab-{tab_key}">
            {body}
        </section>
    </main>
</body>
</html>"#,
        title = escape_html(&page.title),
        icon = escape_html(&page.icon),
        subtitle = escape_html(&page.subtitle),
        css = CSS,
        sidebar = sidebar(catalog, view),
        metrics = metrics_strip(catalog),
        tabs = tab_bar(view),
        tab_key = view.tab.as_str(),
        body = body,
    )
}

fn sidebar(catalog: &Catalog, view: &ViewState) -> String {
    let page = catalog.page();
    let mut html = format!(
        r#"<aside>
        <div class="sidebar-banner">
            <h3>{icon} {title}</h3>
            <p>{motto}</p>
        </div>
        <h4>🧭 快速导航</h4>
        <nav>"#,
        icon = escape_html(&page.icon),
        title = escape_html(&page.title),
        motto = escape_html(&page.sidebar_motto),
    );

    for link in catalog.navigation() {
        let _ = write!(
            html,
            r#"<a class="nav-btn" href="{}">{} {}</a>"#,
            escape_html(&link.href),
            escape_html(&link.icon),
            escape_html(&link.label),
        );
    }
    let _ = write!(
        html,
        r#"<a class="nav-btn active" href="{}" aria-current="page">{} {}</a></nav>"#,
        SHOWCASE_PATH,
        escape_html(&page.icon),
        escape_html(&page.title),
    );

    html.push_str("<h4>🎯 思政理论学习</h4>");
    for topic in catalog.theory_topics() {
        let _ = write!(
            html,
            r#"<a class="topic-btn" href="{}?{}">📖 {}</a>"#,
            SHOWCASE_PATH,
            escape_html(&view.query_for_topic(topic)),
            escape_html(topic),
        );
    }
    if let Some(topic) = &view.topic {
        let _ = write!(
            html,
            r#"<div class="notice info">开始学习：{}</div>"#,
            escape_html(topic)
        );
    }

    html.push_str(r#"<h4>💫 思政学习提醒</h4><div class="notice success"><strong>🎯 本周思政重点：</strong><ul>"#);
    for item in catalog.weekly_focus() {
        let _ = write!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul></div></aside>");
    html
}

fn metrics_strip(catalog: &Catalog) -> String {
    let mut html = String::from(r#"<div class="metrics">"#);
    for metric in catalog.metrics() {
        let _ = write!(
            html,
            r#"<div class="metric"><div class="label">{} {}</div><div class="value">{}</div><div class="delta">{}</div></div>"#,
            escape_html(&metric.icon),
            escape_html(&metric.label),
            escape_html(&metric.value),
            escape_html(&metric.delta),
        );
    }
    html.push_str("</div>");
    html
}

fn tab_bar(view: &ViewState) -> String {
    let mut html = String::from(r#"<nav class="tabs">"#);
    for tab in Tab::ALL {
        let class = if tab == view.tab { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            r#"<a{} href="{}?{}">{}</a>"#,
            class,
            SHOWCASE_PATH,
            escape_html(&view.query_for_tab(tab)),
            tab.title(),
        );
    }
    html.push_str("</nav>");
    html
}

fn works_tab(catalog: &Catalog, view: &ViewState) -> String {
    let mut options = String::new();
    for tag in catalog.ideology_vocabulary() {
        let selected = if view.selection.contains(tag) { " selected" } else { "" };
        let tag = escape_html(tag);
        let _ = write!(options, r#"<option value="{tag}"{selected}>{tag}</option>"#);
    }

    let filtered = filter_projects(catalog.projects(), &view.selection);
    let mut left = String::new();
    let mut right = String::new();
    for (i, project) in filtered.iter().enumerate() {
        let column = if i % 2 == 0 { &mut left } else { &mut right };
        column.push_str(&project_card(project));
    }

    let cards = if filtered.is_empty() {
        r#"<p class="empty-state">没有符合所选思政元素的作品</p>"#.to_string()
    } else {
        format!(r#"<div class="grid-2"><div>{left}</div><div>{right}</div></div>"#)
    };

    format!(
        r#"<div class="section-title">🎨 优秀作品展示</div>
        <form class="filter-form" method="get" action="{action}">
            <input type="hidden" name="tab" value="works">
            <label>筛选思政元素<br>
                <select name="tag" multiple>{options}</select>
            </label>
            <button type="submit">筛选</button>
        </form>
        <p class="hint">显示 {shown} / {total} 个作品</p>
        {cards}"#,
        action = SHOWCASE_PATH,
        shown = filtered.len(),
        total = catalog.projects().len(),
    )
}

fn project_card(project: &ProjectRecord) -> String {
    let badges: Vec<String> = project
        .ideology
        .iter()
        .map(|tag| format!(r#"<span class="ideology-badge">{}</span>"#, escape_html(tag)))
        .collect();

    format!(
        r#"<article class="project-card">
            <h3>🎯 {title}</h3>
            <p><strong>👤 作者：</strong>{authors}</p>
            <p><strong>💻 技术亮点：</strong>{highlight}</p>
            <p><strong>🇨🇳 思政元素：</strong>{badges}</p>
            <div class="description"><p><strong>📝 项目描述：</strong>{description}</p></div>
            <p><strong>🏆 获得荣誉：</strong><span class="achievement">{achievement}</span></p>
            <p><strong>🌍 社会影响：</strong>{impact}</p>
            <p><strong>📅 完成时间：</strong>{date}</p>
        </article>"#,
        title = escape_html(&project.title),
        authors = escape_html(&project.authors),
        highlight = escape_html(&project.tech_highlight),
        badges = badges.join(" "),
        description = escape_html(&project.description),
        achievement = escape_html(&project.achievement),
        impact = escape_html(&project.impact),
        date = project.completed_on.format("%Y-%m-%d"),
    )
}

fn analysis_tab(catalog: &Catalog) -> String {
    let pie = PieChart::from_distribution("🇨🇳 思政元素分布", catalog.ideology_distribution());
    let bar = BarChart::from_distribution("📊 项目类型分布", catalog.project_types());

    let awards: String = catalog.awards().iter().map(award_card).collect();

    format!(
        r#"<div class="section-title">📊 成果数据分析</div>
        <div class="grid-2">
            <div class="chart-card" id="ideology-chart"><h3>{pie_title}</h3>{pie_svg}{legend}</div>
            <div class="chart-card" id="type-chart"><h3>{bar_title}</h3>{bar_svg}</div>
        </div>
        <h3>🌟 代表性成果</h3>
        {awards}"#,
        pie_title = escape_html(&pie.title),
        pie_svg = pie.to_svg(),
        legend = pie.legend_html(),
        bar_title = escape_html(&bar.title),
        bar_svg = bar.to_svg(),
    )
}

fn award_card(award: &AwardSummary) -> String {
    let tiers: Vec<String> = award.awards.iter().map(|a| escape_html(a)).collect();
    format!(
        r#"<div class="project-card award-card">
            <div class="award-row">
                <div>
                    <h4>🏅 {name}</h4>
                    <p><strong>🎖️ 获奖情况：</strong>{tiers}</p>
                </div>
                <div class="award-year">{year}<small>获奖年份</small></div>
            </div>
        </div>"#,
        name = escape_html(&award.name),
        tiers = tiers.join(" | "),
        year = escape_html(&award.year),
    )
}

fn submit_tab(
    catalog: &Catalog,
    view: &ViewState,
    submission: Option<SubmissionView<'_>>,
) -> String {
    let mut requirements = String::new();
    for item in catalog.call_requirements() {
        let _ = write!(requirements, "<li>{}</li>", escape_html(item));
    }

    // Only a rejected draft is kept in the form; an accepted one starts over
    let draft = submission
        .filter(|s| !s.outcome.is_accepted())
        .map(|s| s.draft.clone())
        .unwrap_or_default();

    let mut categories = String::new();
    for category in catalog.submission_categories() {
        let selected = if draft.category.as_deref() == Some(category.as_str()) {
            " selected"
        } else {
            ""
        };
        let category = escape_html(category);
        let _ = write!(
            categories,
            r#"<option value="{category}"{selected}>{category}</option>"#
        );
    }

    let mut tags = String::new();
    for tag in catalog.ideology_vocabulary() {
        let selected = if draft.tags.contains(tag) { " selected" } else { "" };
        let tag = escape_html(tag);
        let _ = write!(tags, r#"<option value="{tag}"{selected}>{tag}</option>"#);
    }

    let accept: Vec<String> = catalog
        .accepted_extensions()
        .iter()
        .map(|ext| format!(".{}", escape_html(ext)))
        .collect();

    let result = match submission {
        Some(SubmissionView { outcome, .. }) => {
            let class = if outcome.is_accepted() { "success" } else { "error" };
            format!(
                r#"<div class="notice {class}" id="submission-result">{}</div>"#,
                escape_html(outcome.message())
            )
        }
        None => String::new(),
    };

    format!(
        r#"<div class="section-title">💡 作品征集</div>
        <div class="project-card">
            <h3>🚀 期待您的精彩作品！</h3>
            <p>我们正在征集更多优秀的图像处理作品，展示您在技术学习和思政教育方面的成果。</p>
            <p><strong>作品要求：</strong></p>
            <ul>{requirements}</ul>
        </div>
        <h3>📤 在线提交</h3>
        {result}
        <form class="submission-form" method="post" action="{action}?{query}" enctype="multipart/form-data">
            <div class="grid-2">
                <div>
                    <label class="required" for="work_name">🎯 {work_name_label}</label>
                    <input type="text" id="work_name" name="work_name" value="{work_name}" placeholder="请输入作品名称">
                    <label class="required" for="author">👤 {author_label}</label>
                    <input type="text" id="author" name="author" value="{author}" placeholder="请输入作者姓名">
                    <label for="contact">📞 联系方式</label>
                    <input type="text" id="contact" name="contact" value="{contact}" placeholder="请输入手机或邮箱">
                    <label for="category">📊 作品类型</label>
                    <select id="category" name="category">{categories}</select>
                </div>
                <div>
                    <label for="tags">🇨🇳 思政元素</label>
                    <select id="tags" name="tag" multiple>{tags}</select>
                    <label for="tech_stack">💻 技术栈</label>
                    <input type="text" id="tech_stack" name="tech_stack" value="{tech_stack}" placeholder="如：Python, OpenCV, TensorFlow等">
                    <label for="application_field">🌍 应用领域</label>
                    <input type="text" id="application_field" name="application_field" value="{application_field}" placeholder="如：医疗、教育、环保等">
                </div>
            </div>
            <label class="required" for="description">📝 {description_label}</label>
            <textarea id="description" name="description" rows="6" placeholder="请详细描述您的作品，包括技术原理、创新点、应用场景、社会价值等...">{description}</textarea>
            <label for="attachments">📎 上传作品文件</label>
            <input type="file" id="attachments" name="attachments" multiple accept="{accept}">
            <p class="hint">可上传代码文件、文档、演示文稿等</p>
            <button type="submit">🚀 提交作品</button>
        </form>"#,
        action = SUBMIT_PATH,
        query = escape_html(&view.query_for_tab(Tab::Submit)),
        work_name_label = RequiredField::WorkName.label(),
        author_label = RequiredField::AuthorName.label(),
        description_label = RequiredField::Description.label(),
        work_name = escape_html(&draft.work_name),
        author = escape_html(&draft.author),
        contact = escape_html(&draft.contact),
        tech_stack = escape_html(&draft.tech_stack),
        application_field = escape_html(&draft.application_field),
        description = escape_html(&draft.description),
        accept = accept.join(","),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagSelection;

    fn count_cards(html: &str) -> usize {
        html.matches(r#"<article class="project-card">"#).count()
    }

    #[test]
    fn test_works_tab_shows_all_cards_by_default() {
        let catalog = Catalog::builtin().unwrap();
        let html = showcase_page(&catalog, &ViewState::default(), None);
        assert_eq!(count_cards(&html), 8);
        assert!(html.contains("显示 8 / 8 个作品"));
    }

    #[test]
    fn test_works_tab_applies_selection() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::default();
        view.selection = TagSelection::from_values(["创新意识"]);
        let html = showcase_page(&catalog, &view, None);
        assert_eq!(count_cards(&html), 3);
        assert!(html.contains(r#"<option value="创新意识" selected>"#));
    }

    #[test]
    fn test_empty_result_message() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::default();
        view.selection = TagSelection::from_values(["追求卓越"]);
        let html = showcase_page(&catalog, &view, None);
        assert_eq!(count_cards(&html), 0);
        assert!(html.contains("没有符合所选思政元素的作品"));
    }

    #[test]
    fn test_metrics_and_navigation_rendered() {
        let catalog = Catalog::builtin().unwrap();
        let html = showcase_page(&catalog, &ViewState::default(), None);
        assert_eq!(html.matches(r#"<div class="metric">"#).count(), 4);
        assert!(html.contains("156个"));
        assert!(html.contains("深度融合"));
        assert_eq!(html.matches(r#"class="nav-btn""#).count(), 4);
        assert!(html.contains(r#"class="nav-btn active""#));
    }

    #[test]
    fn test_analysis_tab_has_charts_and_awards() {
        let catalog = Catalog::builtin().unwrap();
        let html = showcase_page(&catalog, &ViewState::with_tab(Tab::Analysis), None);
        assert!(html.contains(r#"id="ideology-chart""#));
        assert!(html.contains(r#"id="type-chart""#));
        assert_eq!(html.matches("award-card").count(), 4);
        assert!(html.contains("一等奖3项 | 二等奖5项 | 三等奖8项"));
        assert_eq!(count_cards(&html), 0);
    }

    #[test]
    fn test_submit_tab_renders_form_and_outcome() {
        let catalog = Catalog::builtin().unwrap();
        let draft = SubmissionDraft::default();
        let outcome = draft.validate();
        let submission = SubmissionView {
            draft: &draft,
            outcome: &outcome,
        };
        let html = showcase_page(&catalog, &ViewState::with_tab(Tab::Submit), Some(submission));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(html.contains(r#"accept=".zip,.rar,.pdf,.doc,.docx,.ppt,.pptx""#));
        assert!(html.contains(r#"class="notice error""#));
        assert!(html.contains("请填写作品名称、作者姓名和作品描述等必填信息"));
        assert!(html.contains("🎯 作品名称"));
    }

    #[test]
    fn test_rejected_draft_is_written_back() {
        let catalog = Catalog::builtin().unwrap();
        let draft = SubmissionDraft {
            work_name: "遥感\"去云\"系统".into(),
            category: Some("社会服务类".into()),
            tags: TagSelection::from_values(["家国情怀"]),
            description: "<b>描述</b>".into(),
            ..Default::default()
        };
        let outcome = draft.validate();
        let submission = SubmissionView {
            draft: &draft,
            outcome: &outcome,
        };
        let html = showcase_page(&catalog, &ViewState::with_tab(Tab::Submit), Some(submission));
        assert!(html.contains(r#"value="遥感&quot;去云&quot;系统""#));
        assert!(html.contains(r#"<option value="社会服务类" selected>"#));
        assert!(html.contains(r#"<option value="家国情怀" selected>"#));
        assert!(html.contains("&lt;b&gt;描述&lt;/b&gt;</textarea>"));
    }

    #[test]
    fn test_accepted_draft_clears_form() {
        let catalog = Catalog::builtin().unwrap();
        let draft = SubmissionDraft {
            work_name: "遥感去云系统".into(),
            author: "张三".into(),
            description: "描述".into(),
            ..Default::default()
        };
        let outcome = draft.validate();
        let submission = SubmissionView {
            draft: &draft,
            outcome: &outcome,
        };
        let html = showcase_page(&catalog, &ViewState::with_tab(Tab::Submit), Some(submission));
        assert!(html.contains(r#"class="notice success""#));
        assert!(html.contains(r#"name="work_name" value="""#));
        assert!(!html.contains("遥感去云系统"));
    }

    #[test]
    fn test_form_action_keeps_filter_selection() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::with_tab(Tab::Submit);
        view.selection = TagSelection::from_values(["创新意识"]);
        let html = showcase_page(&catalog, &view, None);
        let expected = format!(
            r#"action="{}?{}""#,
            SUBMIT_PATH,
            escape_html(&view.query_for_tab(Tab::Submit))
        );
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_topic_notice() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ViewState::default();
        view.topic = Some(catalog.theory_topics()[1].clone());
        let html = showcase_page(&catalog, &view, None);
        assert!(html.contains("开始学习：科技创新与国家发展战略"));
    }

    #[test]
    fn test_echoed_file_names_are_escaped() {
        let catalog = Catalog::builtin().unwrap();
        let draft = SubmissionDraft {
            work_name: "a".into(),
            author: "b".into(),
            description: "c".into(),
            attachments: vec!["<img>.pdf".into()],
            ..Default::default()
        };
        let outcome = draft.validate();
        let submission = SubmissionView {
            draft: &draft,
            outcome: &outcome,
        };
        let html = showcase_page(&catalog, &ViewState::with_tab(Tab::Submit), Some(submission));
        assert!(html.contains("已上传文件：&lt;img&gt;.pdf"));
    }
}
