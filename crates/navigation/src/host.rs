use crate::{EventOutcome, NavigationConfig, NavigationEvent};
use core_types::HDirection;
use dom::{Dom, DomError, DomRange, Id, Placement};
use layout::ClientRects;

/// The editor services navigation runs against.
///
/// All reads reflect the current state; implementations refresh geometry
/// after every tree mutation they perform.
pub trait EditorHost {
    // ===== content =====

    fn dom(&self) -> &Dom;

    /// Boundary of every caret walk.
    fn editable_root(&self) -> Id;

    fn client_rects(&self) -> &dyn ClientRects;

    fn config(&self) -> &NavigationConfig;

    // ===== selection =====

    fn selection(&self) -> DomRange;

    fn set_selection(&mut self, range: DomRange);

    /// Draw a caret marker beside `node` and return the collapsed range
    /// the marker stands for.
    fn show_caret_indicator(&mut self, direction: HDirection, node: Id, before: bool)
    -> Option<DomRange>;

    fn scroll_into_view(&mut self, range: &DomRange);

    fn scroll_node_into_view(&mut self, node: Id);

    // ===== events =====

    fn fire(&mut self, event: &NavigationEvent) -> EventOutcome;

    // ===== mutation =====

    fn create_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> Id;

    fn append_child(&mut self, parent: Id, child: Id) -> Result<(), DomError>;

    fn insert_adjacent(&mut self, reference: Id, node: Id, placement: Placement)
    -> Result<(), DomError>;
}
