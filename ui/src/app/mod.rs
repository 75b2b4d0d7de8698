pub mod nearby_workers;
pub mod shell;
pub mod worker_profile;

pub use nearby_workers::NearbyWorkersSection;
pub use shell::{AppShell, PopupNotifier};
pub use worker_profile::WorkerProfileSection;
