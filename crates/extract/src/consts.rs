pub const OG_SITE_NAME: &str = "og:site_name";
pub const OG_URL: &str = "og:url";
pub const FB_APP_ID: &str = "fb:app_id";
pub const FB_ADMINS: &str = "fb:admins";

/// Name of the image variant derived for social sharing.
pub const OPENGRAPH_VARIANT: &str = "opengraph";
/// Object relation member listing every image on the related object.
pub const RELATED_IMAGES: &str = "related_images";

pub const DATA_TYPE_IMAGE: &str = "ezimage";
pub const DATA_TYPE_OBJECT_RELATION: &str = "ezobjectrelation";
