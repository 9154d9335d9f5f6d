// Adapters layer: concrete trace sinks behind the TraceSink port.

pub mod sink;
