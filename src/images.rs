use log::debug;

use crate::model::{CoffeeRecipe, Temperature};

/// Where a recipe image is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContext {
    List,
    Detail,
}

/// Resource name for a temperature in a given context
pub fn image_name(temperature: Temperature, context: ImageContext) -> &'static str {
    match (temperature, context) {
        (Temperature::Hot, ImageContext::List) => "hot_list",
        (Temperature::Cold, ImageContext::List) => "cold_list",
        (Temperature::Hot, ImageContext::Detail) => "hot_detail",
        (Temperature::Cold, ImageContext::Detail) => "cold_detail",
    }
}

/// Looks up an image handle by resource name
pub trait ImageResolver {
    type Handle;

    fn resolve(&self, name: &str) -> Option<Self::Handle>;
}

/// Resolve the image for `recipe`, never failing.
///
/// List images fall back to the detail image, and both fall back to
/// `placeholder`.
pub fn resolve_image<R: ImageResolver>(
    resolver: &R,
    recipe: &CoffeeRecipe,
    context: ImageContext,
    placeholder: R::Handle,
) -> R::Handle {
    let mut candidates = vec![image_name(recipe.temperature, context)];
    if context == ImageContext::List {
        candidates.push(image_name(recipe.temperature, ImageContext::Detail));
    }

    candidates
        .into_iter()
        .find_map(|name| resolver.resolve(name))
        .unwrap_or_else(|| {
            debug!("No image for recipe '{}', using placeholder", recipe.id);
            placeholder
        })
}
