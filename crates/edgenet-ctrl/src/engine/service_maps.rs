//! Filtered views of per-node ingress/egress service routing.

use edgenet_types::NodeServiceMaps;

use super::Engine;
use crate::error::CtrlError;

/// Optional filters for a service-map read. Empty strings mean "no filter",
/// matching the query-parameter wire form.
#[derive(Debug, Clone, Default)]
pub struct ServiceMapFilter {
    pub node: String,
    /// "ingress", "egress" or empty. Any other value excludes both sides.
    pub direction: String,
    pub service: String,
}

impl ServiceMapFilter {
    fn is_empty(&self) -> bool {
        self.node.is_empty() && self.direction.is_empty() && self.service.is_empty()
    }
}

impl Engine {
    /// Service maps of the active scenario, reduced by the given filters.
    /// A node survives filtering only if at least one of its entries does.
    pub async fn service_maps(
        &self,
        filter: &ServiceMapFilter,
    ) -> Result<Vec<NodeServiceMaps>, CtrlError> {
        let state = self.active.read().await;
        if !state.active {
            return Err(CtrlError::NoActiveScenario);
        }

        let maps = self.topology.service_maps().await?;
        if filter.is_empty() {
            return Ok(maps);
        }

        let mut filtered = Vec::new();
        for node_maps in maps {
            if !filter.node.is_empty() && node_maps.node != filter.node {
                continue;
            }

            // Node filter alone keeps the record untouched.
            if filter.direction.is_empty() && filter.service.is_empty() {
                filtered.push(node_maps);
                continue;
            }

            let mut kept = NodeServiceMaps {
                node: node_maps.node,
                ..NodeServiceMaps::default()
            };
            if filter.direction.is_empty() || filter.direction == "ingress" {
                for entry in node_maps.ingress_service_map {
                    if filter.service.is_empty() || entry.name == filter.service {
                        kept.ingress_service_map.push(entry);
                    }
                }
            }
            if filter.direction.is_empty() || filter.direction == "egress" {
                for entry in node_maps.egress_service_map {
                    if filter.service.is_empty()
                        || entry.name == filter.service
                        || entry.me_svc_name.as_deref() == Some(filter.service.as_str())
                    {
                        kept.egress_service_map.push(entry);
                    }
                }
            }

            if !kept.ingress_service_map.is_empty() || !kept.egress_service_map.is_empty() {
                filtered.push(kept);
            }
        }
        Ok(filtered)
    }
}
