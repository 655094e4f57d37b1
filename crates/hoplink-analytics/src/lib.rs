//! [`EventSink`] implementations for the analytics queue.
//!
//! [`AmqpEventSink`] publishes persistent JSON click events to a durable
//! AMQP queue. [`RecordingEventSink`] and [`NoopEventSink`] back tests and
//! brokerless deployments.
//!
//! [`EventSink`]: hoplink_core::EventSink

pub mod amqp;
pub mod memory;
pub mod noop;

pub use amqp::AmqpEventSink;
pub use memory::RecordingEventSink;
pub use noop::NoopEventSink;
