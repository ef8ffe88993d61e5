//! Page synchronization for paged views.
//!
//! [`PageSynchronizer`] owns the one number that matters, the current page,
//! and keeps everything that depends on it consistent: the page indicator,
//! the forward/back buttons, and the scroll position of the paged container.
//! It does not know how any of those are drawn. They are reached through the
//! [`PageContainer`], [`PageIndicator`], and [`NavControl`] traits, lent to
//! each call as a [`Collaborators`] bundle and never retained.
//!
//! Pages change from two directions:
//!
//! * **Navigation requests** (buttons, indicator, keys) go through
//!   [`set_current_page`](PageSynchronizer::set_current_page). Out-of-range
//!   requests are dropped. Accepted ones update the outputs and then tell
//!   the container to scroll.
//! * **Scroll gestures** report when a drag ends and when deceleration ends.
//!   Once the content has settled the page is derived from the content
//!   offset and committed without a scroll command, since the container is
//!   already there.

use thiserror::Error;

/// How the target item lines up with the viewport after a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// The item's starting edge sits on the viewport's starting edge.
    Leading,
}

/// The scrollable paged container: one item per page, one page per viewport
/// width.
pub trait PageContainer {
    /// Number of pages. May change between calls; never cached.
    fn item_count(&self) -> usize;

    /// Current horizontal content offset.
    fn content_offset_x(&self) -> f32;

    /// Width of the visible area, in the same unit as the offset.
    fn viewport_width(&self) -> f32;

    /// Bring `index` into view.
    fn scroll_to_item(&mut self, index: usize, align: ScrollAlign, animated: bool);
}

/// Something that displays the current page (dots, "2/5", ...).
pub trait PageIndicator {
    /// Show `page` as current.
    fn set_current_page(&mut self, page: usize);
}

/// A control that can be enabled or disabled (next/previous buttons).
pub trait NavControl {
    /// Enable or disable the control.
    fn set_enabled(&mut self, enabled: bool);
}

/// The collaborators a [`PageSynchronizer`] call may touch.
///
/// The container is required; the indicator and both buttons are optional
/// and simply skipped when absent.
pub struct Collaborators<'a> {
    /// The paged container.
    pub container: &'a mut dyn PageContainer,
    /// The page indicator, if any.
    pub indicator: Option<&'a mut dyn PageIndicator>,
    /// The "next page" control, if any.
    pub forward: Option<&'a mut dyn NavControl>,
    /// The "previous page" control, if any.
    pub back: Option<&'a mut dyn NavControl>,
}

impl<'a> Collaborators<'a> {
    /// Bind a container with no indicator or buttons.
    pub fn new(container: &'a mut dyn PageContainer) -> Self {
        Self {
            container,
            indicator: None,
            forward: None,
            back: None,
        }
    }

    /// Attach a page indicator.
    pub fn with_indicator(mut self, indicator: &'a mut dyn PageIndicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Attach the "next page" control.
    pub fn with_forward(mut self, forward: &'a mut dyn NavControl) -> Self {
        self.forward = Some(forward);
        self
    }

    /// Attach the "previous page" control.
    pub fn with_back(mut self, back: &'a mut dyn NavControl) -> Self {
        self.back = Some(back);
        self
    }
}

/// Where a scroll gesture is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture pending.
    #[default]
    Idle,
    /// A drag ended with momentum; waiting for the deceleration to finish.
    AwaitingDeceleration,
}

/// A settle was attempted with geometry that cannot name a page.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SettleError {
    /// Zero, negative, or non-finite viewport width.
    #[error("viewport width must be positive and finite, got {0}")]
    InvalidViewportWidth(f32),
    /// NaN or infinite content offset.
    #[error("content offset must be finite, got {0}")]
    NonFiniteOffset(f32),
}

/// The page nearest to a content offset.
///
/// Shifting by half a viewport before flooring rounds to the nearest page:
/// with a width of 320, offset 150 gives page 0 and offset 170 gives page 1.
/// The result is not range-checked.
pub fn page_for_offset(content_offset_x: f32, viewport_width: f32) -> Result<isize, SettleError> {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return Err(SettleError::InvalidViewportWidth(viewport_width));
    }
    if !content_offset_x.is_finite() {
        return Err(SettleError::NonFiniteOffset(content_offset_x));
    }
    let raw = (content_offset_x + 0.5 * viewport_width) / viewport_width;
    Ok(raw.floor() as isize)
}

/// Owns the current page and the drag state of a paged view.
#[derive(Debug, Default)]
pub struct PageSynchronizer {
    current: usize,
    drag: DragState,
}

impl PageSynchronizer {
    /// Start on page 0, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed page.
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// The gesture state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Navigate to `page`.
    ///
    /// Requests outside `0..item_count` are ignored and return `false`.
    /// Otherwise the page is committed, the indicator and buttons are
    /// updated, and only then is the container asked to scroll `page` to its
    /// leading edge. Re-requesting the current page repeats all of that.
    pub fn set_current_page(
        &mut self,
        io: &mut Collaborators<'_>,
        page: isize,
        animated: bool,
    ) -> bool {
        let count = io.container.item_count();
        let Some(page) = usize::try_from(page).ok().filter(|&p| p < count) else {
            tracing::trace!(requested = page, count, "ignoring out-of-range page request");
            return false;
        };

        self.commit(io, page, count);
        io.container.scroll_to_item(page, ScrollAlign::Leading, animated);
        true
    }

    /// Move `delta` pages from the current one, animated.
    pub fn navigate_relative(&mut self, io: &mut Collaborators<'_>, delta: isize) -> bool {
        let target = isize::try_from(self.current)
            .ok()
            .and_then(|current| current.checked_add(delta));
        match target {
            Some(page) => self.set_current_page(io, page, true),
            None => false,
        }
    }

    /// The indicator asked for `requested`; navigate there, animated.
    pub fn on_indicator_changed(&mut self, io: &mut Collaborators<'_>, requested: isize) -> bool {
        self.set_current_page(io, requested, true)
    }

    /// The user lifted their finger (released the mouse).
    ///
    /// With momentum the page is decided later, in
    /// [`on_deceleration_ended`](Self::on_deceleration_ended). Without it the
    /// content is already at rest and the page is committed now. Returns the
    /// committed page, if one was. A failed settle changes nothing.
    pub fn on_drag_ended(
        &mut self,
        io: &mut Collaborators<'_>,
        will_decelerate: bool,
    ) -> Result<Option<usize>, SettleError> {
        if will_decelerate {
            tracing::debug!("drag ended with momentum; awaiting deceleration");
            self.drag = DragState::AwaitingDeceleration;
            return Ok(None);
        }
        let page = self.settle_from_container(io)?;
        self.drag = DragState::Idle;
        Ok(Some(page))
    }

    /// The content stopped moving after a fling.
    ///
    /// Ignored unless a drag is awaiting it; decelerations that did not come
    /// from a drag (programmatic scrolls) do not move the page.
    pub fn on_deceleration_ended(
        &mut self,
        io: &mut Collaborators<'_>,
    ) -> Result<Option<usize>, SettleError> {
        if self.drag != DragState::AwaitingDeceleration {
            return Ok(None);
        }
        let page = self.settle_from_container(io)?;
        self.drag = DragState::Idle;
        Ok(Some(page))
    }

    /// Commit the page nearest to `content_offset_x` and update the
    /// indicator and buttons. No scroll command is issued.
    ///
    /// An offset past either end (overscroll) lands on the first or last
    /// page. With no pages the current page becomes 0. Invalid geometry is
    /// rejected before anything changes.
    pub fn on_scroll_settled(
        &mut self,
        io: &mut Collaborators<'_>,
        content_offset_x: f32,
        viewport_width: f32,
    ) -> Result<usize, SettleError> {
        let nearest = page_for_offset(content_offset_x, viewport_width)?;
        let count = io.container.item_count();
        let last = count.saturating_sub(1);
        let page = usize::try_from(nearest).map_or(0, |p| p.min(last));
        if isize::try_from(page).ok() != Some(nearest) {
            tracing::debug!(nearest, page, "settled offset out of range; clamped");
        }

        self.commit(io, page, count);
        Ok(page)
    }

    /// Re-derive a valid page after the container's items changed.
    ///
    /// An empty container resets to page 0 with both buttons disabled. A
    /// page past the new end moves to the last page without animation.
    /// Otherwise outputs are refreshed in place.
    pub fn reload(&mut self, io: &mut Collaborators<'_>) {
        let count = io.container.item_count();
        self.drag = DragState::Idle;
        if count == 0 {
            self.commit(io, 0, 0);
        } else if self.current >= count {
            let last = count - 1;
            self.commit(io, last, count);
            io.container.scroll_to_item(last, ScrollAlign::Leading, false);
        } else {
            self.sync_outputs(io);
        }
    }

    /// Push the current page to the indicator and buttons without
    /// scrolling, e.g. right after they are attached.
    pub fn sync_outputs(&self, io: &mut Collaborators<'_>) {
        let count = io.container.item_count();
        self.publish(io, count);
    }

    fn settle_from_container(&mut self, io: &mut Collaborators<'_>) -> Result<usize, SettleError> {
        let offset = io.container.content_offset_x();
        let width = io.container.viewport_width();
        self.on_scroll_settled(io, offset, width)
    }

    fn commit(&mut self, io: &mut Collaborators<'_>, page: usize, count: usize) {
        if page != self.current {
            tracing::debug!(from = self.current, to = page, count, "page committed");
        }
        self.current = page;
        self.publish(io, count);
    }

    fn publish(&self, io: &mut Collaborators<'_>, count: usize) {
        if let Some(indicator) = io.indicator.as_deref_mut() {
            indicator.set_current_page(self.current);
        }
        if let Some(forward) = io.forward.as_deref_mut() {
            forward.set_enabled(self.current + 1 < count);
        }
        if let Some(back) = io.back.as_deref_mut() {
            back.set_enabled(self.current > 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Indicator(usize),
        Forward(bool),
        Back(bool),
        Scroll(usize, bool),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeContainer {
        count: usize,
        offset: f32,
        width: f32,
        log: Log,
    }

    impl PageContainer for FakeContainer {
        fn item_count(&self) -> usize {
            self.count
        }
        fn content_offset_x(&self) -> f32 {
            self.offset
        }
        fn viewport_width(&self) -> f32 {
            self.width
        }
        fn scroll_to_item(&mut self, index: usize, align: ScrollAlign, animated: bool) {
            assert_eq!(align, ScrollAlign::Leading);
            self.log.borrow_mut().push(Call::Scroll(index, animated));
        }
    }

    struct FakeIndicator {
        page: Option<usize>,
        log: Log,
    }

    impl PageIndicator for FakeIndicator {
        fn set_current_page(&mut self, page: usize) {
            self.page = Some(page);
            self.log.borrow_mut().push(Call::Indicator(page));
        }
    }

    struct FakeButton {
        forward: bool,
        enabled: Option<bool>,
        log: Log,
    }

    impl NavControl for FakeButton {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = Some(enabled);
            let call = if self.forward {
                Call::Forward(enabled)
            } else {
                Call::Back(enabled)
            };
            self.log.borrow_mut().push(call);
        }
    }

    struct Rig {
        container: FakeContainer,
        indicator: FakeIndicator,
        forward: FakeButton,
        back: FakeButton,
        log: Log,
    }

    impl Rig {
        fn new(count: usize) -> Self {
            let log: Log = Rc::default();
            Rig {
                container: FakeContainer {
                    count,
                    offset: 0.0,
                    width: 320.0,
                    log: log.clone(),
                },
                indicator: FakeIndicator {
                    page: None,
                    log: log.clone(),
                },
                forward: FakeButton {
                    forward: true,
                    enabled: None,
                    log: log.clone(),
                },
                back: FakeButton {
                    forward: false,
                    enabled: None,
                    log: log.clone(),
                },
                log,
            }
        }

        fn io(&mut self) -> Collaborators<'_> {
            Collaborators::new(&mut self.container)
                .with_indicator(&mut self.indicator)
                .with_forward(&mut self.forward)
                .with_back(&mut self.back)
        }

        fn take(&self) -> Vec<Call> {
            self.log.borrow_mut().drain(..).collect()
        }

        fn scrolls(&self) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|call| matches!(call, Call::Scroll(..)))
                .count()
        }

        fn assert_outputs_match(&self, page: usize) {
            let count = self.container.count;
            assert_eq!(self.indicator.page, Some(page));
            assert_eq!(self.forward.enabled, Some(page + 1 < count));
            assert_eq!(self.back.enabled, Some(page > 0));
        }
    }

    #[test]
    fn starts_idle_on_first_page() {
        let sync = PageSynchronizer::new();
        assert_eq!(sync.current_page(), 0);
        assert_eq!(sync.drag_state(), DragState::Idle);
    }

    #[test]
    fn set_page_updates_outputs_before_scrolling() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();

        assert!(sync.set_current_page(&mut rig.io(), 2, false));
        assert_eq!(sync.current_page(), 2);
        assert_eq!(
            rig.take(),
            vec![
                Call::Indicator(2),
                Call::Forward(true),
                Call::Back(true),
                Call::Scroll(2, false),
            ]
        );
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 3, false);
        rig.take();

        assert!(!sync.set_current_page(&mut rig.io(), -1, true));
        assert!(!sync.set_current_page(&mut rig.io(), 5, true));
        assert!(!sync.set_current_page(&mut rig.io(), isize::MAX, true));
        assert_eq!(sync.current_page(), 3);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn next_past_the_last_page_is_a_noop() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 4, false);
        rig.take();

        assert!(!sync.navigate_relative(&mut rig.io(), 1));
        assert_eq!(sync.current_page(), 4);
        assert_eq!(rig.scrolls(), 0);
    }

    #[test]
    fn previous_on_the_first_page_is_a_noop() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();

        assert!(!sync.navigate_relative(&mut rig.io(), -1));
        assert_eq!(sync.current_page(), 0);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn relative_navigation_animates() {
        let mut rig = Rig::new(3);
        let mut sync = PageSynchronizer::new();

        assert!(sync.navigate_relative(&mut rig.io(), 1));
        assert_eq!(rig.take().last(), Some(&Call::Scroll(1, true)));
        assert!(sync.navigate_relative(&mut rig.io(), -1));
        assert_eq!(rig.take().last(), Some(&Call::Scroll(0, true)));
    }

    #[test]
    fn indicator_requests_navigate_animated() {
        let mut rig = Rig::new(4);
        let mut sync = PageSynchronizer::new();

        assert!(sync.on_indicator_changed(&mut rig.io(), 3));
        assert_eq!(sync.current_page(), 3);
        assert_eq!(rig.take().last(), Some(&Call::Scroll(3, true)));

        assert!(!sync.on_indicator_changed(&mut rig.io(), -1));
        assert_eq!(sync.current_page(), 3);
    }

    #[test]
    fn buttons_track_every_reachable_page() {
        let mut rig = Rig::new(4);
        let mut sync = PageSynchronizer::new();
        for page in 0..4 {
            sync.set_current_page(&mut rig.io(), page, false);
            rig.assert_outputs_match(page as usize);
        }
        for _ in 0..4 {
            sync.navigate_relative(&mut rig.io(), -1);
            rig.assert_outputs_match(sync.current_page());
        }
    }

    #[test]
    fn single_page_disables_both_buttons() {
        let mut rig = Rig::new(1);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 0, false);
        assert_eq!(rig.forward.enabled, Some(false));
        assert_eq!(rig.back.enabled, Some(false));
    }

    #[test]
    fn range_holds_over_arbitrary_requests() {
        let mut rig = Rig::new(6);
        let mut sync = PageSynchronizer::new();
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let value = (seed >> 16) as isize % 11 - 3;
            match seed % 3 {
                0 => sync.set_current_page(&mut rig.io(), value, seed % 2 == 0),
                1 => sync.navigate_relative(&mut rig.io(), if value < 0 { -1 } else { 1 }),
                _ => sync.on_indicator_changed(&mut rig.io(), value),
            };
            assert!(sync.current_page() < 6);
        }
    }

    #[test]
    fn recommitting_the_same_page_resyncs_everything() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 1, true);
        let first = rig.take();

        assert!(sync.set_current_page(&mut rig.io(), 1, true));
        assert_eq!(rig.take(), first);
        assert_eq!(sync.current_page(), 1);
    }

    #[test]
    fn offsets_round_to_the_nearest_page() {
        assert_eq!(page_for_offset(150.0, 320.0), Ok(0));
        assert_eq!(page_for_offset(170.0, 320.0), Ok(1));
        assert_eq!(page_for_offset(640.0, 320.0), Ok(2));
        assert_eq!(page_for_offset(-200.0, 320.0), Ok(-1));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        assert_eq!(
            page_for_offset(10.0, 0.0),
            Err(SettleError::InvalidViewportWidth(0.0))
        );
        assert_eq!(
            page_for_offset(10.0, -5.0),
            Err(SettleError::InvalidViewportWidth(-5.0))
        );
        assert!(matches!(
            page_for_offset(f32::NAN, 320.0),
            Err(SettleError::NonFiniteOffset(_))
        ));
    }

    #[test]
    fn settle_commits_without_scrolling() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();

        assert_eq!(sync.on_scroll_settled(&mut rig.io(), 170.0, 320.0), Ok(1));
        assert_eq!(sync.current_page(), 1);
        assert_eq!(
            rig.take(),
            vec![Call::Indicator(1), Call::Forward(true), Call::Back(true)]
        );

        assert_eq!(sync.on_scroll_settled(&mut rig.io(), 150.0, 320.0), Ok(0));
        rig.assert_outputs_match(0);
        assert_eq!(rig.scrolls(), 0);
    }

    #[test]
    fn settle_with_zero_width_changes_nothing() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 2, false);
        rig.take();

        let err = sync.on_scroll_settled(&mut rig.io(), 100.0, 0.0).unwrap_err();
        assert_eq!(err, SettleError::InvalidViewportWidth(0.0));
        assert_eq!(sync.current_page(), 2);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn overscroll_lands_on_the_nearest_end() {
        let mut rig = Rig::new(3);
        let mut sync = PageSynchronizer::new();
        assert_eq!(sync.on_scroll_settled(&mut rig.io(), 2000.0, 320.0), Ok(2));
        assert_eq!(sync.on_scroll_settled(&mut rig.io(), -400.0, 320.0), Ok(0));
    }

    #[test]
    fn drag_without_momentum_settles_immediately() {
        let mut rig = Rig::new(5);
        rig.container.offset = 640.0;
        let mut sync = PageSynchronizer::new();

        assert_eq!(sync.on_drag_ended(&mut rig.io(), false), Ok(Some(2)));
        assert_eq!(sync.current_page(), 2);
        assert_eq!(sync.drag_state(), DragState::Idle);
        assert_eq!(rig.scrolls(), 0);
    }

    #[test]
    fn drag_with_momentum_waits_for_deceleration() {
        let mut rig = Rig::new(5);
        rig.container.offset = 300.0;
        let mut sync = PageSynchronizer::new();

        assert_eq!(sync.on_drag_ended(&mut rig.io(), true), Ok(None));
        assert_eq!(sync.drag_state(), DragState::AwaitingDeceleration);
        assert_eq!(sync.current_page(), 0);
        assert!(rig.take().is_empty());

        rig.container.offset = 960.0;
        assert_eq!(sync.on_deceleration_ended(&mut rig.io()), Ok(Some(3)));
        assert_eq!(sync.current_page(), 3);
        assert_eq!(sync.drag_state(), DragState::Idle);
        rig.assert_outputs_match(3);
    }

    #[test]
    fn deceleration_without_a_drag_is_ignored() {
        let mut rig = Rig::new(5);
        rig.container.offset = 960.0;
        let mut sync = PageSynchronizer::new();

        assert_eq!(sync.on_deceleration_ended(&mut rig.io()), Ok(None));
        assert_eq!(sync.current_page(), 0);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn catching_a_fling_settles_where_it_stopped() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.on_drag_ended(&mut rig.io(), true).unwrap();

        rig.container.offset = 330.0;
        assert_eq!(sync.on_drag_ended(&mut rig.io(), false), Ok(Some(1)));
        assert_eq!(sync.drag_state(), DragState::Idle);
        assert_eq!(sync.on_deceleration_ended(&mut rig.io()), Ok(None));
    }

    #[test]
    fn failed_deceleration_settle_keeps_waiting() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.on_drag_ended(&mut rig.io(), true).unwrap();

        rig.container.width = 0.0;
        assert!(sync.on_deceleration_ended(&mut rig.io()).is_err());
        assert_eq!(sync.drag_state(), DragState::AwaitingDeceleration);

        rig.container.width = 320.0;
        rig.container.offset = 320.0;
        assert_eq!(sync.on_deceleration_ended(&mut rig.io()), Ok(Some(1)));
    }

    #[test]
    fn failed_drag_settle_keeps_waiting() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.on_drag_ended(&mut rig.io(), true).unwrap();
        rig.take();

        rig.container.width = 0.0;
        assert_eq!(
            sync.on_drag_ended(&mut rig.io(), false),
            Err(SettleError::InvalidViewportWidth(0.0))
        );
        assert_eq!(sync.drag_state(), DragState::AwaitingDeceleration);
        assert_eq!(sync.current_page(), 0);
        assert!(rig.take().is_empty());
    }

    #[test]
    fn second_fling_keeps_waiting_for_deceleration() {
        let mut rig = Rig::new(5);
        let mut sync = PageSynchronizer::new();
        sync.on_drag_ended(&mut rig.io(), true).unwrap();
        rig.take();

        rig.container.offset = 700.0;
        assert_eq!(sync.on_drag_ended(&mut rig.io(), true), Ok(None));
        assert_eq!(sync.drag_state(), DragState::AwaitingDeceleration);
        assert_eq!(sync.current_page(), 0);
        assert!(rig.take().is_empty());

        rig.container.offset = 960.0;
        assert_eq!(sync.on_deceleration_ended(&mut rig.io()), Ok(Some(3)));
        assert_eq!(sync.drag_state(), DragState::Idle);
    }

    #[test]
    fn empty_container_rejects_everything_and_disables_buttons() {
        let mut rig = Rig::new(0);
        let mut sync = PageSynchronizer::new();

        assert!(!sync.set_current_page(&mut rig.io(), 0, false));
        assert!(!sync.navigate_relative(&mut rig.io(), 1));
        assert!(rig.take().is_empty());

        sync.sync_outputs(&mut rig.io());
        assert_eq!(rig.forward.enabled, Some(false));
        assert_eq!(rig.back.enabled, Some(false));

        assert_eq!(sync.on_scroll_settled(&mut rig.io(), 0.0, 320.0), Ok(0));
    }

    #[test]
    fn reload_past_the_end_jumps_to_the_last_page() {
        let mut rig = Rig::new(6);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 5, false);
        rig.take();

        rig.container.count = 3;
        sync.reload(&mut rig.io());
        assert_eq!(sync.current_page(), 2);
        assert_eq!(
            rig.take(),
            vec![
                Call::Indicator(2),
                Call::Forward(false),
                Call::Back(true),
                Call::Scroll(2, false),
            ]
        );
    }

    #[test]
    fn reload_in_range_refreshes_without_scrolling() {
        let mut rig = Rig::new(3);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 2, false);
        rig.take();

        rig.container.count = 10;
        sync.reload(&mut rig.io());
        assert_eq!(sync.current_page(), 2);
        assert_eq!(
            rig.take(),
            vec![Call::Indicator(2), Call::Forward(true), Call::Back(true)]
        );
    }

    #[test]
    fn reload_to_empty_resets() {
        let mut rig = Rig::new(3);
        let mut sync = PageSynchronizer::new();
        sync.set_current_page(&mut rig.io(), 2, false);

        rig.container.count = 0;
        sync.reload(&mut rig.io());
        assert_eq!(sync.current_page(), 0);
        assert_eq!(rig.forward.enabled, Some(false));
        assert_eq!(rig.back.enabled, Some(false));
    }

    #[test]
    fn missing_outputs_are_skipped() {
        let mut rig = Rig::new(3);
        let mut sync = PageSynchronizer::new();
        let mut io = Collaborators::new(&mut rig.container);

        assert!(sync.navigate_relative(&mut io, 1));
        assert_eq!(rig.take(), vec![Call::Scroll(1, true)]);
    }
}
