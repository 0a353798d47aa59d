use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Root endpoint payload: service name and API version.
#[derive(Serialize, Debug)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}
