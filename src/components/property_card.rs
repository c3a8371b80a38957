//! One listing card: image, price, address and the optional badges.

use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROWS_OUT, CALENDAR};

use crate::api::Property;
use crate::components::design_system::Badge;
use crate::utils::formatting::{format_price, property_type_color, PLACEHOLDER_IMAGE};

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    // Flips once if the listing image fails to load; the placeholder
    // URL is assumed good.
    let image_error = RwSignal::new(false);

    let image_url = property.image_url.clone();
    let image_src = move || {
        if image_error.get() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
        }
    };

    let price = format_price(property.price.as_deref());
    let location = format!(
        "{}, {} {}",
        property.city,
        property.state,
        property.zip_code.clone().unwrap_or_default()
    );

    view! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden transition-all duration-300 hover:shadow-xl">
            // Listing image with type and cap-rate badges overlaid
            <div class="relative h-48 bg-gray-200">
                <img
                    src=image_src
                    alt=property.address.clone()
                    class="w-full h-full object-cover"
                    on:error=move |_| image_error.set(true)
                />
                {property.property_type.clone().map(|property_type| {
                    let color = property_type_color(&property_type);
                    view! {
                        <span class="absolute top-3 left-3">
                            <Badge class=color>{property_type}</Badge>
                        </span>
                    }
                })}
                {property.cap_rate.clone().map(|cap_rate| view! {
                    <span class="absolute top-3 right-3">
                        <Badge class="bg-green-500 text-white">{format!("{cap_rate} Cap")}</Badge>
                    </span>
                })}
            </div>

            <div class="p-5">
                // Price line
                <div class="mb-3">
                    <span class="text-2xl font-bold text-gray-900">{price}</span>
                    {property.price_per_sf.clone().map(|per_sf| view! {
                        <span class="ml-2 text-sm text-gray-500">{format!("({per_sf})")}</span>
                    })}
                </div>

                // Address
                <h3 class="text-lg font-semibold text-gray-800 mb-1">
                    {property.address.clone()}
                </h3>
                <p class="text-gray-600 mb-3">{location}</p>

                // Size and age badges
                <div class="flex flex-wrap gap-3 text-sm text-gray-600">
                    {property.square_feet.clone().map(|square_feet| view! {
                        <div class="flex items-center gap-1">
                            <Icon icon=ARROWS_OUT size="16px" />
                            <span>{format!("{square_feet} SF")}</span>
                        </div>
                    })}
                    {property.year_built.clone().map(|year_built| view! {
                        <div class="flex items-center gap-1">
                            <Icon icon=CALENDAR size="16px" />
                            <span>{format!("Built {year_built}")}</span>
                        </div>
                    })}
                </div>

                // Provenance footer
                {property.search_name.clone().map(|search_name| view! {
                    <div class="mt-4 pt-4 border-t border-gray-100">
                        <span class="text-xs text-gray-500">"Search: "</span>
                        <span class="text-xs font-medium text-gray-700">{search_name}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
