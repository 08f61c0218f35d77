pub mod host;
pub mod registry;

#[allow(unused_imports)]
pub use host::StubHost;
#[allow(unused_imports)]
pub use registry::{npm_server, npm_server_with_body, versions_body};
