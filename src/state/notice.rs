//! Model behind the toast notifications: severity levels with their fixed
//! visual treatment, notice payloads with their display windows, and the
//! board that owns the live notices.

/// Display window for general notices, in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// Longer window for aggregated error reports.
pub const REPORT_TIMEOUT_MS: u32 = 5_000;

/// Length of the slide-out transition played before removal.
pub const EXIT_TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "toast toast-info",
            Severity::Success => "toast toast-success",
            Severity::Warning => "toast toast-warning",
            Severity::Error => "toast toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "alert-circle",
            Severity::Info | Severity::Warning => "info",
        }
    }
}

/// What a caller asks the notification host to show. The host assigns the
/// id when the notice goes on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeRequest {
    pub lines: Vec<String>,
    pub severity: Severity,
    pub timeout_ms: u32,
}

impl NoticeRequest {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            lines: vec![message.into()],
            severity,
            timeout_ms: NOTICE_TIMEOUT_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Aggregated error report, one line per problem: used for validation
    /// failures and delivery errors, with the longer display window.
    pub fn report(lines: Vec<String>) -> Self {
        Self {
            lines,
            severity: Severity::Error,
            timeout_ms: REPORT_TIMEOUT_MS,
        }
    }
}

/// One on-screen notification. Notices are independent: each carries its
/// own display window and dies on its own timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub lines: Vec<String>,
    pub severity: Severity,
    pub timeout_ms: u32,
}

impl Notice {
    /// When the slide-out starts. Removal follows `EXIT_TRANSITION_MS`
    /// later, so the notice leaves the document exactly at the end of its
    /// display window and never later.
    pub fn exit_delay_ms(&self) -> u32 {
        self.timeout_ms.saturating_sub(EXIT_TRANSITION_MS)
    }
}

/// The set of live notices. Immutable-update style so it can sit behind a
/// reducer handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeBoard {
    next_id: u32,
    pub notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&self, request: NoticeRequest) -> Self {
        let id = self.next_id.wrapping_add(1);
        let mut notices = self.notices.clone();
        notices.push(Notice {
            id,
            lines: request.lines,
            severity: request.severity,
            timeout_ms: request.timeout_ms,
        });
        Self { next_id: id, notices }
    }

    pub fn dismiss(&self, id: u32) -> Self {
        Self {
            next_id: self.next_id,
            notices: self
                .notices
                .iter()
                .filter(|n| n.id != id)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_notices_use_the_short_window() {
        let req = NoticeRequest::info("Galeri foto akan segera tersedia!");
        assert_eq!(req.timeout_ms, NOTICE_TIMEOUT_MS);
        assert_eq!(req.severity, Severity::Info);
    }

    #[test]
    fn reports_use_the_long_window() {
        let req = NoticeRequest::report(vec!["Email tidak valid".into()]);
        assert_eq!(req.timeout_ms, REPORT_TIMEOUT_MS);
        assert_eq!(req.severity, Severity::Error);
    }

    #[test]
    fn severity_treatment_is_fixed() {
        assert_eq!(Severity::Success.icon(), "check-circle");
        assert_eq!(Severity::Error.icon(), "alert-circle");
        assert_eq!(Severity::Warning.class(), "toast toast-warning");
        assert_eq!(Severity::Info.class(), "toast toast-info");
    }

    #[test]
    fn removal_lands_exactly_on_the_display_window() {
        let board = NoticeBoard::default()
            .push(NoticeRequest::info("x"))
            .push(NoticeRequest::report(vec!["Email tidak valid".into()]));
        let info = &board.notices[0];
        let report = &board.notices[1];
        assert_eq!(info.exit_delay_ms() + EXIT_TRANSITION_MS, NOTICE_TIMEOUT_MS);
        assert_eq!(report.exit_delay_ms() + EXIT_TRANSITION_MS, REPORT_TIMEOUT_MS);
    }

    #[test]
    fn board_assigns_unique_ids() {
        let board = NoticeBoard::default()
            .push(NoticeRequest::info("a"))
            .push(NoticeRequest::info("b"));
        assert_eq!(board.notices.len(), 2);
        assert_ne!(board.notices[0].id, board.notices[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_matching_notice() {
        let board = NoticeBoard::default()
            .push(NoticeRequest::info("a"))
            .push(NoticeRequest::info("b"));
        let keep = board.notices[1].id;
        let board = board.dismiss(board.notices[0].id);
        assert_eq!(board.notices.len(), 1);
        assert_eq!(board.notices[0].id, keep);
        // dismissing an unknown id is a no-op
        assert_eq!(board.dismiss(999), board);
    }
}
