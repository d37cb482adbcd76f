/// The engine has no I/O and nothing to await, so the host carries no shared connections —
/// every request synchronously constructs an `Engine` (or calls a static operation) and
/// returns its result. Kept as a unit struct so the router's `.with_state` wiring matches this
/// repository's other HTTP surfaces and has somewhere to grow if host-level state ever appears.
#[derive(Clone, Default)]
pub struct AppState;
