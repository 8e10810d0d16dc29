/// Fault-injection switches used to exercise the error branches.
///
/// The two switches are independent of each other and of the real backing
/// store state.
pub trait SimulationPort: Send + Sync {
    fn storage_unreadable(&self) -> bool;
    fn reload_dead_end(&self) -> bool;
}
