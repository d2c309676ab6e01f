//! HTML fragments
//!
//! Renders views into the markup the page's containers expect. Every piece
//! of content text is escaped; class names and data attributes match the
//! page stylesheet.

use std::fmt::Write;

use crate::domain::pipeline::PipelineRun;
use crate::view::catalog::{CaseStudy, FilterButton, ProjectCard};
use crate::view::quality::ScoreView;
use crate::view::timeline::{MilestoneDetail, TimelineItem};

/// Escapes text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tag_spans(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .collect()
}

/// Filter button row
pub fn filter_buttons(buttons: &[FilterButton]) -> String {
    buttons
        .iter()
        .map(|b| {
            let class = if b.active { "filter-btn active" } else { "filter-btn" };
            format!(r#"<button class="{class}">{}</button>"#, escape(&b.tag))
        })
        .collect()
}

/// Project grid cards
pub fn project_cards(cards: &[ProjectCard]) -> String {
    let mut html = String::new();
    for card in cards {
        let _ = write!(
            html,
            concat!(
                r#"<article class="project-card stagger-item" data-reveal style="--reveal-delay: {delay}ms">"#,
                r#"<div class="project-tags">{tags}</div>"#,
                r#"<div><h3>{title}</h3><p>{summary}</p></div>"#,
                r#"<p class="project-meta">{stack}</p>"#,
                r#"<button class="btn ghost" data-project="{id}">View Case Study</button>"#,
                "</article>"
            ),
            delay = card.reveal_delay_ms,
            tags = tag_spans(&card.tags),
            title = escape(&card.title),
            summary = escape(&card.summary),
            stack = escape(&card.stack),
            id = escape(&card.id),
        );
    }
    html
}

/// Body of the case study modal
pub fn case_study(study: &CaseStudy) -> String {
    let highlights: String = study
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape(h)))
        .collect();

    format!(
        concat!(
            "<h3>{title}</h3>",
            "<p>{summary}</p>",
            "<p><strong>Stack:</strong> {stack}</p>",
            "<ul>{highlights}</ul>",
            r#"<div class="project-tags">{metrics}</div>"#
        ),
        title = escape(&study.title),
        summary = escape(&study.summary),
        stack = escape(&study.stack),
        highlights = highlights,
        metrics = tag_spans(&study.metrics),
    )
}

/// Timeline track items
pub fn timeline_track(items: &[TimelineItem]) -> String {
    let mut html = String::new();
    for item in items {
        let class = if item.active {
            "timeline-item stagger-item active"
        } else {
            "timeline-item stagger-item"
        };
        let _ = write!(
            html,
            r#"<div class="{class}" data-year="{year}" data-reveal style="--reveal-delay: {delay}ms"><strong>{year}</strong><p>{role}</p></div>"#,
            year = item.year,
            delay = item.reveal_delay_ms,
            role = escape(&item.role),
        );
    }
    html
}

/// Detail panel for the active milestone
pub fn timeline_detail(detail: &MilestoneDetail) -> String {
    format!(
        "<h3>{} · {}</h3><p><strong>{}</strong></p><p>{}</p>",
        detail.year,
        escape(&detail.role),
        escape(&detail.org),
        escape(&detail.detail),
    )
}

/// Score text and the ring's CSS variable
pub fn quality_score(view: &ScoreView) -> String {
    format!(
        r#"<div class="score-ring" style="--ring-angle: {}deg"><span id="qualityScore">{}</span></div>"#,
        view.ring_angle_deg, view.score
    )
}

/// Step list with status data attributes
pub fn pipeline_steps(run: &PipelineRun) -> String {
    let mut html = String::new();
    for step in &run.steps {
        let _ = write!(
            html,
            r#"<div class="pipeline-step" data-status="{status}"><span>{name}</span><small>{label}</small></div>"#,
            status = step.status,
            name = escape(&step.name),
            label = step.status.label(),
        );
    }
    html
}

/// Run log, newest line first
pub fn pipeline_log(run: &PipelineRun) -> String {
    run.log
        .iter()
        .rev()
        .map(|line| format!("{}<br />", escape(&line.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pipeline::StepStatus;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"L&T <b>"x"</b> it's"#),
            "L&amp;T &lt;b&gt;&quot;x&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_filter_buttons_mark_active() {
        let html = filter_buttons(&[
            FilterButton {
                tag: "All".to_string(),
                active: false,
            },
            FilterButton {
                tag: "AI".to_string(),
                active: true,
            },
        ]);
        assert_eq!(
            html,
            r#"<button class="filter-btn">All</button><button class="filter-btn active">AI</button>"#
        );
    }

    #[test]
    fn test_project_card_markup() {
        let html = project_cards(&[ProjectCard {
            id: "kpi-dashboards".to_string(),
            title: "KPI <Dashboards>".to_string(),
            summary: "Tableau".to_string(),
            stack: "SQL".to_string(),
            tags: vec!["BI".to_string()],
            reveal_delay_ms: 180,
        }]);

        assert!(html.contains("--reveal-delay: 180ms"));
        assert!(html.contains(r#"<span class="tag">BI</span>"#));
        assert!(html.contains("<h3>KPI &lt;Dashboards&gt;</h3>"));
        assert!(html.contains(r#"data-project="kpi-dashboards""#));
    }

    #[test]
    fn test_timeline_detail_markup() {
        let html = timeline_detail(&MilestoneDetail {
            year: 2022,
            role: "Data Engineer".to_string(),
            org: "L&T Technology Services".to_string(),
            detail: "Built pipelines.".to_string(),
        });
        assert_eq!(
            html,
            "<h3>2022 · Data Engineer</h3><p><strong>L&amp;T Technology Services</strong></p><p>Built pipelines.</p>"
        );
    }

    #[test]
    fn test_pipeline_markup_and_log_order() {
        let mut run = PipelineRun::new(["Ingest", "Publish"]);
        run.begin();
        run.steps[0].status = StepStatus::Done;
        run.steps[1].status = StepStatus::Running;
        run.push_log("first");
        run.push_log("second");

        let steps = pipeline_steps(&run);
        assert!(steps.contains(r#"data-status="done"><span>Ingest</span><small>Done</small>"#));
        assert!(steps.contains(r#"data-status="running"><span>Publish</span><small>Running</small>"#));

        let log = pipeline_log(&run);
        let second = log.find("second").unwrap();
        let first = log.find("first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_case_study_markup() {
        let html = case_study(&CaseStudy {
            id: "dbt-medallion".to_string(),
            title: "dbt Medallion".to_string(),
            summary: "Bronze -> Silver -> Gold".to_string(),
            stack: "dbt, Snowflake".to_string(),
            highlights: vec!["Tests on <every> model".to_string(), "Docs & lineage".to_string()],
            metrics: vec!["40% faster".to_string(), "0 \"broken\" joins".to_string()],
        });

        assert!(html.starts_with("<h3>dbt Medallion</h3><p>Bronze -&gt; Silver -&gt; Gold</p>"));
        assert!(html.contains("<p><strong>Stack:</strong> dbt, Snowflake</p>"));
        assert!(html.contains(
            "<ul><li>Tests on &lt;every&gt; model</li><li>Docs &amp; lineage</li></ul>"
        ));
        assert!(html.ends_with(concat!(
            r#"<div class="project-tags"><span class="tag">40% faster</span>"#,
            r#"<span class="tag">0 &quot;broken&quot; joins</span></div>"#
        )));
    }
}
