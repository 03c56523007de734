use testcontainers::{Container, GenericImage, clients::Cli, core::WaitFor};

///
/// A docker container for spinning up MongoDB.
///

pub const INTERNAL_PORT: u16 = 27017;
const CONTAINER_IDENTIFIER: &str = "mongo";
const DEFAULT_TAG: &str = "6.0";

///
/// A MongoDB the tests can use - either a container started for the test or, with
/// TESTS_USE_EXISTING_CONTAINERS=true, whatever MONGO_URI points at.
///
pub struct TestMongo<'d> {
    _container: Option<Container<'d, GenericImage>>,
    pub uri: String,
}

pub fn image() -> GenericImage {
    GenericImage::new(CONTAINER_IDENTIFIER, DEFAULT_TAG)
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
}

pub fn start(docker: &Cli) -> TestMongo<'_> {
    if crate::common::use_existing_containers() {
        let uri = std::env::var("MONGO_URI").unwrap_or_else(|_| String::from("mongodb://localhost:27017"));
        println!("Using existing MongoDB at {}", uri);
        return TestMongo { _container: None, uri }
    }

    println!("Starting MongoDB docker container, use TESTS_USE_EXISTING_CONTAINERS=true to avoid this step");
    let container = docker.run(image());
    let port = container.get_host_port_ipv4(INTERNAL_PORT);
    println!("Started MongoDB on port {}", port);

    TestMongo {
        _container: Some(container),
        uri: format!("mongodb://localhost:{}", port),
    }
}
