use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which locality segment, if any, a resource identity carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locality {
    Zone,
    Region,
    Location,
    Global,
}

impl Locality {
    fn segment(self) -> &'static str {
        match self {
            Locality::Zone => "zones",
            Locality::Region => "regions",
            Locality::Location => "locations",
            Locality::Global => "global",
        }
    }
}

/// Stable identifier correlating one resource across scans.
///
/// Layout: `projects/{project}/{locality}/{value}/{kind}/{name}`, where the
/// project prefix is omitted for an empty project, the locality pair is
/// omitted when absent, and `Locality::Global` contributes a bare `global/`
/// segment. Identical inputs always produce byte-identical output.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(kind: &str, name: &str, project: &str, locality: Option<(Locality, &str)>) -> Self {
        let mut id = String::new();
        if !project.is_empty() {
            id.push_str("projects/");
            id.push_str(project);
            id.push('/');
        }
        match locality {
            Some((Locality::Global, _)) => id.push_str("global/"),
            Some((loc, value)) => {
                id.push_str(loc.segment());
                id.push('/');
                id.push_str(value);
                id.push('/');
            }
            None => {}
        }
        id.push_str(kind);
        id.push('/');
        id.push_str(name);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_scoped_identity() {
        let id = ResourceId::new(
            "clusters",
            "prod",
            "proj1",
            Some((Locality::Location, "us-central1")),
        );
        assert_eq!(id.as_str(), "projects/proj1/locations/us-central1/clusters/prod");
    }

    #[test]
    fn zone_region_and_global_segments() {
        let zone = ResourceId::new("instances", "vm", "p", Some((Locality::Zone, "us-east1-b")));
        assert_eq!(zone.as_str(), "projects/p/zones/us-east1-b/instances/vm");

        let region = ResourceId::new("subnetworks", "s", "p", Some((Locality::Region, "us-east1")));
        assert_eq!(region.as_str(), "projects/p/regions/us-east1/subnetworks/s");

        let global = ResourceId::new("networks", "default", "p", Some((Locality::Global, "")));
        assert_eq!(global.as_str(), "projects/p/global/networks/default");
    }

    #[test]
    fn project_and_locality_are_optional() {
        assert_eq!(ResourceId::new("buckets", "b", "", None).as_str(), "buckets/b");
        assert_eq!(ResourceId::new("buckets", "b", "p", None).as_str(), "projects/p/buckets/b");
    }
}
