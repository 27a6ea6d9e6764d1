use serde::Deserialize;

/// Query string of `PUT /v1/{type}/{name}`.
#[derive(Debug, Default, Deserialize)]
pub struct PutRecordParams {
    /// Address for A/AAAA, target name for CNAME.
    pub v: Option<String>,
    pub ttl: Option<u32>,
}
