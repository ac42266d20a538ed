//! Static Maps API — map image retrieval. Binary endpoint: responses are
//! image bytes, not a JSON envelope.

pub mod client;

use crate::endpoint::{EndpointConfig, DEFAULT_STATUS_TABLE};
use crate::error::SdkError;
use crate::network::DEFAULT_HOST;
use crate::query::{ApiRequest, ParameterSet};
use crate::shared::LatLng;

pub(crate) const STATIC_MAP_API: EndpointConfig = EndpointConfig {
    host: DEFAULT_HOST,
    path: "/maps/api/staticmap",
    accepts_client_id: true,
    // Unused for the binary success path; non-200 staticmap errors come
    // back as plain text and are classified by HTTP status alone.
    statuses: DEFAULT_STATUS_TABLE,
};

/// A set of markers sharing one style, rendered onto the map.
#[derive(Debug, Clone, Default)]
pub struct Markers {
    /// Style directives, e.g. `color:blue|label:S`.
    pub style: String,
    /// Marker locations, `lat,lng` or addresses.
    pub locations: Vec<String>,
}

impl Markers {
    fn encode(&self) -> String {
        if self.style.is_empty() {
            self.locations.join("|")
        } else {
            format!("{}|{}", self.style, self.locations.join("|"))
        }
    }
}

/// Request for the Static Maps API.
#[derive(Debug, Clone, Default)]
pub struct StaticMapRequest {
    /// Rectangular dimensions of the map image, `[WIDTH, HEIGHT]`.
    /// Must hold exactly two elements.
    pub size: Vec<u32>,
    /// Center of the map. Optional when markers determine the viewport.
    pub center: Option<LatLng>,
    pub zoom: Option<u8>,
    /// Pixel-density multiplier (1, 2 or 4).
    pub scale: Option<u8>,
    /// Image format, e.g. `png`, `jpg`.
    pub format: Option<String>,
    /// Map type, e.g. `roadmap`, `satellite`.
    pub maptype: Option<String>,
    pub language: Option<String>,
    pub markers: Vec<Markers>,
}

impl StaticMapRequest {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: vec![width, height],
            ..Self::default()
        }
    }
}

impl ApiRequest for StaticMapRequest {
    fn params(&self) -> Result<ParameterSet, SdkError> {
        if self.size.len() != 2 {
            return Err(SdkError::InvalidRequest(
                "size must be exactly [width, height]".to_string(),
            ));
        }

        let mut q = ParameterSet::new();
        q.push("size", format!("{}x{}", self.size[0], self.size[1]));
        if let Some(center) = &self.center {
            q.push("center", center.to_string());
        }
        if let Some(zoom) = self.zoom {
            q.push("zoom", zoom.to_string());
        }
        if let Some(scale) = self.scale {
            q.push("scale", scale.to_string());
        }
        if let Some(format) = &self.format {
            q.push("format", format.as_str());
        }
        if let Some(maptype) = &self.maptype {
            q.push("maptype", maptype.as_str());
        }
        if let Some(language) = &self.language {
            q.push("language", language.as_str());
        }
        for markers in &self.markers {
            q.push("markers", markers.encode());
        }
        Ok(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_encodes_as_width_x_height() {
        let params = StaticMapRequest::new(600, 300).params().unwrap();
        assert_eq!(params.encode(), "size=600x300");
    }

    #[test]
    fn one_element_size_is_rejected() {
        let request = StaticMapRequest {
            size: vec![600],
            ..StaticMapRequest::default()
        };
        assert!(matches!(
            request.params(),
            Err(SdkError::InvalidRequest(_))
        ));
    }

    #[test]
    fn empty_size_is_rejected() {
        assert!(StaticMapRequest::default().params().is_err());
    }

    #[test]
    fn markers_join_style_and_locations_with_pipes() {
        let mut request = StaticMapRequest::new(400, 400);
        request.markers.push(Markers {
            style: "color:blue|label:S".to_string(),
            locations: vec!["40.702147,-74.015794".to_string(), "40.711614,-74.012318".to_string()],
        });

        let params = request.params().unwrap();
        let rendered: Vec<_> = params.iter().collect();
        assert_eq!(
            rendered[1],
            (
                "markers",
                "color:blue|label:S|40.702147,-74.015794|40.711614,-74.012318"
            )
        );
    }

    #[test]
    fn optional_fields_appear_in_stable_order() {
        let request = StaticMapRequest {
            size: vec![600, 300],
            center: Some(LatLng::new(40.714728, -73.998672)),
            zoom: Some(12),
            maptype: Some("roadmap".to_string()),
            ..StaticMapRequest::default()
        };
        let params = request.params().unwrap();
        let names: Vec<_> = params.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, ["size", "center", "zoom", "maptype"]);
    }
}
