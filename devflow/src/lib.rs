//! Domain engine for a Q&A discussion platform.
//!
//! The crate is organised hexagonally: [`domain`] holds the aggregates, the
//! vote state resolver, the reputation tables, and the services implementing
//! the driving ports; `domain::ports` defines the command/query contracts
//! consumed by presentation layers and the repository contracts implemented
//! by store adapters. [`outbound`] ships an in-memory document-store adapter
//! suitable for tests and embedded use.
//!
//! The engine deliberately reproduces the weak-consistency model of the
//! system it implements: each operation is a sequence of independent store
//! calls with no transactional wrapping, and partial side effects of a
//! failed multi-step operation are not rolled back.

pub mod domain;
pub mod outbound;
