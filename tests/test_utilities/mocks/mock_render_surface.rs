use std::sync::{Arc, Mutex};
use trailwatch::prelude::*;

/// One recorded render call, reduced to the fields the tests assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Summary(SummaryCounts),
    Table {
        rules: Vec<String>,
        page: usize,
    },
    Pagination {
        page: usize,
        total_pages: usize,
        prev_enabled: bool,
        next_enabled: bool,
        window: (usize, usize),
    },
    ZeroState,
    Detail {
        rule: String,
        has_playbook: bool,
    },
    CloseDetail,
    Notice(String),
    Error(String),
}

/// Mock RenderSurface that captures every render call for inspection.
#[derive(Default, Clone)]
pub struct MockRenderSurface {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl MockRenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn last_summary(&self) -> Option<SummaryCounts> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Summary(counts) => Some(counts),
            _ => None,
        })
    }

    pub fn summary_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, RenderEvent::Summary(_)))
            .count()
    }

    pub fn last_table(&self) -> Option<(Vec<String>, usize)> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Table { rules, page } => Some((rules, page)),
            _ => None,
        })
    }

    pub fn last_pagination(&self) -> Option<RenderEvent> {
        self.events()
            .into_iter()
            .rev()
            .find(|e| matches!(e, RenderEvent::Pagination { .. }))
    }

    pub fn zero_state_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, RenderEvent::ZeroState))
            .count()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Notice(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last_detail(&self) -> Option<(String, bool)> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Detail { rule, has_playbook } => Some((rule, has_playbook)),
            _ => None,
        })
    }
}

impl RenderSurface for MockRenderSurface {
    fn render_summary(&self, counts: &SummaryCounts) {
        self.record(RenderEvent::Summary(*counts));
    }

    fn render_table(&self, view: &PageView<'_>) {
        self.record(RenderEvent::Table {
            rules: view.records.iter().map(|a| a.rule.clone()).collect(),
            page: view.page,
        });
    }

    fn render_pagination(&self, view: &PageView<'_>) {
        self.record(RenderEvent::Pagination {
            page: view.page,
            total_pages: view.total_pages,
            prev_enabled: view.prev_enabled(),
            next_enabled: view.next_enabled(),
            window: view.window,
        });
    }

    fn render_zero_state(&self) {
        self.record(RenderEvent::ZeroState);
    }

    fn render_detail(&self, alert: &AlertRecord) {
        self.record(RenderEvent::Detail {
            rule: alert.rule.clone(),
            has_playbook: alert.playbook.is_some(),
        });
    }

    fn close_detail(&self) {
        self.record(RenderEvent::CloseDetail);
    }

    fn render_notice(&self, message: &str) {
        self.record(RenderEvent::Notice(message.to_string()));
    }

    fn render_error(&self, message: &str) {
        self.record(RenderEvent::Error(message.to_string()));
    }
}
