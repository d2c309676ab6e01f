use std::time::Duration;

use folio_core::domain::pipeline::StepStatus;
use folio_core::service::{ClickTarget, SUMMARY_LINE};
use folio_core::view::pipeline::RunOutcome;
use folio_core::{CatalogError, Command, Content, Error, PageController, SiteConfig, ViewUpdate};

fn controller() -> PageController {
    let content = Content::builtin().unwrap();
    PageController::new(content, &SiteConfig::default())
}

fn catalog_ids(update: ViewUpdate) -> Vec<String> {
    match update {
        ViewUpdate::Catalog(view) => view.cards.into_iter().map(|c| c.id).collect(),
        other => panic!("expected catalog update, got {other:?}"),
    }
}

#[test]
fn test_initial_views() {
    let mut page = controller();
    let views = page.initial_views();

    assert_eq!(views.catalog.cards.len(), 4);
    assert!(views.catalog.filters[0].active);
    assert_eq!(views.catalog.filters[0].tag, "All");
    assert_eq!(views.timeline.active_year(), Some(2026));
    assert_eq!(views.score.score, 0);
    assert!(!views.pipeline.running);
    assert!(
        views
            .pipeline
            .steps
            .iter()
            .all(|s| s.status == StepStatus::Pending)
    );
}

#[test]
fn test_filter_scenarios() {
    let mut page = controller();

    let ids = catalog_ids(page.dispatch(Command::SetFilterTag("AI".into())).unwrap());
    assert_eq!(ids, ["rag-pipeline"]);

    page.dispatch(Command::SetFilterTag("All".into())).unwrap();
    let ids = catalog_ids(page.dispatch(Command::SetQuery("kafka".into())).unwrap());
    assert_eq!(ids, ["realtime-streaming"]);

    page.dispatch(Command::SetFilterTag("Analytics".into())).unwrap();
    let ids = catalog_ids(page.dispatch(Command::SetQuery("Tableau".into())).unwrap());
    assert_eq!(ids, ["kpi-dashboards"]);
}

#[test]
fn test_unknown_tag_is_an_error() {
    let mut page = controller();
    let result = page.dispatch(Command::SetFilterTag("Fortran".into()));
    assert_eq!(
        result,
        Err(Error::Catalog(CatalogError::UnknownTag("Fortran".into())))
    );
    assert_eq!(page.catalog().filter().active_tag, "All");
}

#[test]
fn test_case_study_flow() {
    let mut page = controller();

    match page
        .dispatch(Command::ViewCaseStudy("realtime-streaming".into()))
        .unwrap()
    {
        ViewUpdate::Modal(modal) => {
            assert!(modal.visible);
            assert_eq!(modal.case_study.unwrap().stack, "Kafka, Spark, Python");
        }
        other => panic!("expected modal, got {other:?}"),
    }

    assert_eq!(
        page.dispatch(Command::ViewCaseStudy("nope".into())).unwrap(),
        ViewUpdate::Unchanged
    );

    match page.dispatch(Command::Dismiss).unwrap() {
        ViewUpdate::Modal(modal) => assert!(modal.aria_hidden),
        other => panic!("expected modal, got {other:?}"),
    }
}

#[test]
fn test_timeline_slider() {
    let mut page = controller();
    match page.dispatch(Command::SelectYear(2025.4)).unwrap() {
        ViewUpdate::Timeline(view) => {
            assert_eq!(view.active_year(), Some(2025));
            assert_eq!(view.detail.unwrap().org, "Community Dreams Foundation");
        }
        other => panic!("expected timeline, got {other:?}"),
    }
}

#[test]
fn test_quality_toggles() {
    let mut page = controller();
    let mut last = None;
    for id in ["schema", "nulls", "uniqueness", "freshness", "integrity"] {
        last = Some(
            page.dispatch(Command::ToggleCheck {
                id: id.into(),
                checked: true,
            })
            .unwrap(),
        );
    }
    match last.unwrap() {
        ViewUpdate::Score(score) => {
            assert_eq!(score.score, 100);
            assert_eq!(score.ring_angle_deg, 360);
        }
        other => panic!("expected score, got {other:?}"),
    }

    assert!(
        page.dispatch(Command::ToggleCheck {
            id: "vibes".into(),
            checked: true
        })
        .is_err()
    );
}

#[test]
fn test_scroll_and_click_effects() {
    let mut page = controller();

    assert_eq!(
        page.dispatch(Command::Scroll(100.0)).unwrap(),
        ViewUpdate::RequestFrame
    );
    assert_eq!(
        page.dispatch(Command::Scroll(200.0)).unwrap(),
        ViewUpdate::Unchanged
    );
    match page
        .dispatch(Command::Frame {
            document_height: 2200.0,
            viewport_height: 200.0,
        })
        .unwrap()
    {
        ViewUpdate::Scroll(frame) => assert!((frame.progress_percent - 10.0).abs() < 1e-9),
        other => panic!("expected scroll frame, got {other:?}"),
    }

    assert_eq!(
        page.dispatch(Command::Click {
            x: 5,
            y: 5,
            target: ClickTarget::Button
        })
        .unwrap(),
        ViewUpdate::Unchanged
    );
    match page
        .dispatch(Command::Click {
            x: 5,
            y: 5,
            target: ClickTarget::Surface,
        })
        .unwrap()
    {
        ViewUpdate::Bubble(bubble) => {
            assert!(page.bubbles().terms().contains(&bubble.word));
        }
        other => panic!("expected bubble, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_pipeline_run_through_controller() {
    let page = controller();
    assert_eq!(page.simulator().step_delay(), Duration::from_millis(800));

    let (first, second) = tokio::join!(page.run_pipeline(), page.run_pipeline());
    assert_eq!(first, RunOutcome::Completed);
    assert_eq!(second, RunOutcome::AlreadyRunning);

    let run = page.simulator().snapshot();
    assert!(run.is_complete());
    assert_eq!(run.log.last().unwrap().message, SUMMARY_LINE);
}
