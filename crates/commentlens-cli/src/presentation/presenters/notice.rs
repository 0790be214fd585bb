use crate::presentation::view_models::{CommandResultViewModel, NoticeViewModel, StatusBadge};
use commentlens_engine::{Notice, NoticeKind};

pub fn present_notice(notice: Notice) -> CommandResultViewModel<NoticeViewModel> {
    let badge = match notice.kind {
        NoticeKind::Quota => StatusBadge::warning(notice.title.clone()),
        NoticeKind::Generic => StatusBadge::error(notice.title.clone()),
    };

    CommandResultViewModel::new(NoticeViewModel {
        kind: notice.kind,
        title: notice.title,
        message: notice.message,
        help: notice.help,
    })
    .with_badge(badge)
}
