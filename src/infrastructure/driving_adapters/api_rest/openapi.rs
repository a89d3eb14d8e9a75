//! OpenAPI Document
//!
//! Statically declared description of the REST surface, served as JSON and
//! through Swagger UI.

use utoipa::OpenApi;

use super::dto::{
    CreateDestinationDto, DestinationResponseDto, PatchDestinationDto, UpdateDestinationDto,
};
use super::handlers::{destinations, root};
use crate::shared::errors::{ErrorDetail, ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel Listings API",
        version = "v1",
        description = "CRUD access to the travel destinations of the Travel Listings service.",
        contact(name = "Travel Listings", email = "contact@travelapp.local"),
        license(name = "BSD License"),
    ),
    paths(
        root::api_root,
        destinations::list_destinations,
        destinations::create_destination,
        destinations::get_destination,
        destinations::update_destination,
        destinations::partial_update_destination,
        destinations::delete_destination,
    ),
    components(schemas(
        CreateDestinationDto,
        UpdateDestinationDto,
        PatchDestinationDto,
        DestinationResponseDto,
        root::ApiRootResponse,
        ErrorResponse,
        ErrorDetail,
        FieldError,
    )),
    tags(
        (name = "destinations", description = "Travel destination management"),
        (name = "root", description = "API discovery"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_describes_every_destination_route() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Travel Listings API");
        assert_eq!(doc.info.version, "v1");

        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/"));
        assert!(paths.contains_key("/api/destinations/"));
        assert!(paths.contains_key("/api/destinations/{id}/"));

        let item = &paths["/api/destinations/{id}/"];
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());

        let collection = &paths["/api/destinations/"];
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());
    }

    #[test]
    fn test_document_declares_destination_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("DestinationResponseDto"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
