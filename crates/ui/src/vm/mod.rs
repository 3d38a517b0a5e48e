mod guide_vm;

pub use guide_vm::{GuideVm, NavBarVm, NavIntent, map_guide};
