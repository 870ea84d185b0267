pub(crate) const BUFFER_CAPACITY: usize = 10;
// One vacant slot distinguishes a full buffer from an empty one.
pub(crate) const N_SLOTS: usize = BUFFER_CAPACITY + 1;
pub(crate) const FIELD_OF_VIEW_DEGREES: f64 = 180.;
pub(crate) const MIN_RESOLUTION_DEGREES: f64 = 0.1;
pub(crate) const MAX_RESOLUTION_DEGREES: f64 = 1.;
pub(crate) const DEFAULT_RESOLUTION_DEGREES: f64 = 1.;
