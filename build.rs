//! Retrieves information about the version of the engine from Git and the build
//! environment. This information is compiled into the binary and printed on
//! startup.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
