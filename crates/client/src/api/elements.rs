//! Element operations

use reqwest::Method;
use serde::Deserialize;

use meridian_domain::{Bbox, Element, ElementId, ElementType};

use crate::error::{ApiError, ApiResult};
use crate::http::{AuthMode, Body};
use crate::xml;

use super::Osm;

/// The `{"elements": [...]}` envelope every element read returns.
#[derive(Debug, Deserialize)]
pub(crate) struct ElementsEnvelope {
    #[serde(default)]
    pub(crate) elements: Vec<Element>,
}

impl Osm {
    /// Fetches a single element by id.
    ///
    /// # Errors
    ///
    /// An unknown id surfaces as the server's 404 via
    /// [`ApiError::UnexpectedHttpStatus`].
    pub async fn fetch_element(&self, id: ElementId) -> ApiResult<Element> {
        let url = self.api_url(&format!("{}/{}.json", id.kind, id.id))?;
        let envelope: ElementsEnvelope = self.get_json(url, "fetch_element").await?;
        envelope
            .elements
            .into_iter()
            .next()
            .ok_or(ApiError::MissingPayload("element"))
    }

    /// Fetches a single element as the server's raw XML document.
    pub async fn fetch_element_xml(&self, id: ElementId) -> ApiResult<String> {
        let url = self.api_url(&format!("{}/{}", id.kind, id.id))?;
        self.request_text(Method::GET, url, None, AuthMode::None, "fetch_element_xml")
            .await
    }

    /// Fetches several elements of one type in a single call.
    pub async fn fetch_elements(&self, kind: ElementType, ids: &[i64]) -> ApiResult<Vec<Element>> {
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = self.api_url_with_query(
            &format!("{}.json", kind.as_plural_str()),
            &[(kind.as_plural_str(), joined)],
        )?;
        let envelope: ElementsEnvelope = self.get_json(url, "fetch_elements").await?;
        Ok(envelope.elements)
    }

    /// Fetches an element together with every element it references:
    /// a way with its nodes, a relation with all its members.
    ///
    /// Nodes reference nothing, so fetching a node returns the node
    /// alone.
    pub async fn fetch_element_full(&self, id: ElementId) -> ApiResult<Vec<Element>> {
        if id.kind == ElementType::Node {
            return Ok(vec![self.fetch_element(id).await?]);
        }
        let url = self.api_url(&format!("{}/{}/full.json", id.kind, id.id))?;
        let envelope: ElementsEnvelope = self.get_json(url, "fetch_element_full").await?;
        Ok(envelope.elements)
    }

    /// Fetches all relations the given element is a member of.
    pub async fn fetch_relations_for_element(&self, id: ElementId) -> ApiResult<Vec<Element>> {
        let url = self.api_url(&format!("{}/{}/relations.json", id.kind, id.id))?;
        let envelope: ElementsEnvelope =
            self.get_json(url, "fetch_relations_for_element").await?;
        Ok(envelope.elements)
    }

    /// Fetches all ways the given node belongs to.
    pub async fn fetch_ways_for_node(&self, node_id: i64) -> ApiResult<Vec<Element>> {
        let url = self.api_url(&format!("node/{node_id}/ways.json"))?;
        let envelope: ElementsEnvelope = self.get_json(url, "fetch_ways_for_node").await?;
        Ok(envelope.elements)
    }

    /// Fetches every element inside a bounding box.
    ///
    /// The server caps the box size and the element count; oversized
    /// requests fail with the server's error, untouched.
    pub async fn fetch_map_by_bbox(&self, bbox: Bbox) -> ApiResult<Vec<Element>> {
        let url = self.api_url_with_query("map.json", &[("bbox", bbox.to_string())])?;
        let envelope: ElementsEnvelope = self.get_json(url, "fetch_map_by_bbox").await?;
        Ok(envelope.elements)
    }

    /// Fetches a bounding box as the server's raw XML document.
    pub async fn fetch_map_by_bbox_xml(&self, bbox: Bbox) -> ApiResult<String> {
        let url = self.api_url_with_query("map", &[("bbox", bbox.to_string())])?;
        self.request_text(Method::GET, url, None, AuthMode::None, "fetch_map_by_bbox_xml")
            .await
    }

    /// Uploads an element inside an open changeset.
    ///
    /// A brand-new element (see [`meridian_domain::Node::create`]) goes
    /// to the create endpoint and the server-assigned id is returned;
    /// an existing element goes to its update endpoint and the new
    /// version number is returned.
    pub async fn send_element(&self, element: &Element, changeset: i64) -> ApiResult<i64> {
        let kind = element.element_type();
        let path = if element.is_new() {
            format!("{kind}/create")
        } else {
            format!("{kind}/{}", element.id())
        };
        let url = self.api_url(&path)?;
        let payload = xml::element_payload(element, changeset)?;
        let text = self
            .request_text(
                Method::PUT,
                url,
                Some(Body::xml(payload)),
                AuthMode::Required,
                "send_element",
            )
            .await?;
        Self::parse_numeric(&text)
    }

    /// Deletes an element inside an open changeset and returns the new
    /// version number.
    pub async fn delete_element(&self, element: &Element, changeset: i64) -> ApiResult<i64> {
        let url = self.api_url(&format!("{}/{}", element.element_type(), element.id()))?;
        let payload = xml::element_payload(element, changeset)?;
        let text = self
            .request_text(
                Method::DELETE,
                url,
                Some(Body::xml(payload)),
                AuthMode::Required,
                "delete_element",
            )
            .await?;
        Self::parse_numeric(&text)
    }
}
