pub const DEFAULT_NODE_CAPACITY: usize = 5;
pub const DEFAULT_MIN_NODE_SIZE: f32 = 5.0;

// Split policy knobs. A node under the size floor keeps accepting items
// regardless of count; otherwise it splits once it holds more than
// `node_capacity` items.
#[derive(Debug, Clone)]
pub struct Config {
    pub node_capacity: usize,
    pub min_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: DEFAULT_NODE_CAPACITY,
            min_size: DEFAULT_MIN_NODE_SIZE,
        }
    }
}
