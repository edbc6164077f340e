pub mod collision;
pub mod domain;
pub mod points;
pub mod scale;
pub mod types;

pub use collision::resolve_label_collisions;
pub use domain::{AxisDomain, DomainPadding};
pub use points::{ChartPoint, ColorToken, LabelBand, PointKind, PointSet, build_chart_points};
pub use scale::LinearScale;
pub use types::{PriceTargetSet, Viewport};
