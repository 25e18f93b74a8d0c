//! Static report content: the sample dataset, per-slide tables and the slide catalog.

pub mod opportunities;
pub mod sase;
pub mod seo;
pub mod slides;
pub mod traffic_overview;

pub use seo::{Anomaly, AnomalyKind, Priority, QuickWin, SeoDataset};
pub use slides::{CONTENTS, ContentsSection, SLIDES, SlideKind, SlideSpec, slide_index};
