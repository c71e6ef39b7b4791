#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The shortest-path solver was handed a component with unreachable node
    /// pairs. Component splitting is supposed to rule this out, so hitting it
    /// means the input bypassed the splitter (or `separate_components` is off
    /// and the graph is disconnected). Treating the pair as infinitely far
    /// apart would zero out its weight and silently degrade the drawing, so
    /// the solver refuses instead.
    #[error("disconnected component: node {unreached} is unreachable from node {origin}")]
    DisconnectedComponent { origin: usize, unreached: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
