//! Leaflet Map Surface
//!
//! The map, its marker layer and the user-position overlay, built on the
//! `leaflet` crate. Only the marker-cluster plugin and the `L.divIcon`
//! factory go through the inline shim below.

use leaflet::{
    Circle, CircleOptions, DivIcon, DivIconOptions, ErrorEvent, LatLng, LayerGroup, LocateOptions, LocationEvent,
    Map, MapOptions, Marker, MarkerOptions, Point, TileLayer, TileLayerOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::category::CategoryStyle;
use crate::config::MapConfig;
use crate::error::{GeolocationFailure, MapError, Result};
use crate::markers::MarkerLayer;
use crate::models::Attraction;
use crate::selection::{accuracy_radius, CameraMove, UserFix, UserPosition};

#[wasm_bindgen(inline_js = r#"
export function createMarkerGroup(cluster) {
    if (cluster && typeof L.markerClusterGroup === 'function') {
        return L.markerClusterGroup({
            maxClusterRadius: 50,
            spiderfyOnMaxZoom: true,
            showCoverageOnHover: false,
            zoomToBoundsOnClick: true,
            iconCreateFunction: function (c) {
                return L.divIcon({
                    html: '<div class="cluster-icon"><span>' + c.getChildCount() + '</span></div>',
                    className: 'custom-cluster',
                    iconSize: [40, 40]
                });
            }
        });
    }
    return L.layerGroup();
}

export function createDivIcon(options) {
    return L.divIcon(options);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = createMarkerGroup)]
    fn create_marker_group(cluster: bool) -> std::result::Result<LayerGroup, JsValue>;

    // `DivIcon::new` in the crate constructs an `L.Icon`
    #[wasm_bindgen(js_name = createDivIcon)]
    fn create_div_icon(options: &DivIconOptions) -> DivIcon;
}

#[derive(Serialize)]
struct FlyOptions {
    animate: bool,
    duration: f64,
}

fn js_err(e: JsValue) -> MapError {
    MapError::Leaflet(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

fn div_icon(html: String, class_name: &str, size: (f64, f64), anchor: Option<(f64, f64)>) -> DivIcon {
    let options = DivIconOptions::new();
    options.set_html(html);
    options.set_class_name(class_name.to_string());
    options.set_icon_size(Point::new(size.0, size.1));
    if let Some((x, y)) = anchor {
        options.set_icon_anchor(Point::new(x, y));
        options.set_popup_anchor(Point::new(0.0, -y));
    }
    create_div_icon(&options)
}

fn marker_at(lat: f64, lng: f64, icon: DivIcon) -> Marker {
    let options = MarkerOptions::new();
    options.set_icon(icon.into());
    Marker::new_with_options(&LatLng::new(lat, lng), &options)
}

/// Position reported by Leaflet's `locationfound`
pub fn user_fix(event: &LocationEvent) -> UserFix {
    let latlng = event.lat_lng();
    UserFix {
        lat: latlng.lat(),
        lng: latlng.lng(),
        accuracy: event.accuracy(),
    }
}

/// Failure reported by Leaflet's `locationerror`
pub fn location_error(event: &ErrorEvent) -> MapError {
    MapError::Geolocation(GeolocationFailure {
        code: u32::try_from(event.code()).ok().filter(|c| *c > 0),
        message: event.message(),
    })
}

// ========================
// Marker Layer
// ========================

/// Live marker plus its click listener
pub struct MarkerHandle {
    marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

pub struct LeafletMarkers {
    group: LayerGroup,
    on_click: std::rc::Rc<dyn Fn(u32)>,
}

impl MarkerLayer for LeafletMarkers {
    type Handle = MarkerHandle;

    fn add(&mut self, attraction: &Attraction, style: CategoryStyle) -> MarkerHandle {
        let icon = div_icon(style.marker_svg(), "custom-marker-icon", (32.0, 40.0), Some((16.0, 40.0)));
        let marker = marker_at(attraction.lat, attraction.lng, icon);

        let id = attraction.id;
        let on_click = self.on_click.clone();
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |_ev: JsValue| on_click(id));
        marker.on("click", closure.as_ref());
        self.group.add_layer(&marker);
        MarkerHandle { marker, _on_click: closure }
    }

    fn remove(&mut self, handle: MarkerHandle) {
        self.group.remove_layer(&handle.marker);
    }

    fn clear(&mut self) {
        self.group.clear_layers();
    }
}

// ========================
// Map Surface
// ========================

/// User position overlay: accuracy circle and "you are here" marker
pub struct UserOverlay {
    circle: Circle,
    marker: Marker,
}

impl UserOverlay {
    fn remove(&self) {
        self.circle.remove();
        self.marker.remove();
    }
}

pub struct LeafletMap {
    map: Map,
    pub markers: LeafletMarkers,
    user_position: UserPosition<UserOverlay>,
    locate_max_zoom: f64,
}

impl LeafletMap {
    /// Create the map inside `element` with the configured tiles and marker group
    pub fn mount(element: &web_sys::HtmlElement, config: &MapConfig, on_marker_click: impl Fn(u32) + 'static) -> Result<Self> {
        let options = MapOptions::new();
        options.set_max_zoom(config.max_zoom);
        let map = Map::new_with_element(element, &options).map_err(js_err)?;
        let (lat, lng) = config.center;
        map.set_view(&LatLng::new(lat, lng), config.initial_zoom);

        let tile_options = TileLayerOptions::new();
        tile_options.set_attribution(config.tile_attribution.clone());
        tile_options.set_max_zoom(config.max_zoom);
        // Typed as a bool by the crate; Leaflet takes the subdomain letters
        js_sys::Reflect::set(
            &tile_options,
            &JsValue::from_str("subdomains"),
            &JsValue::from_str(&config.tile_subdomains),
        )
        .map_err(js_err)?;
        TileLayer::new_options(&config.tile_url, &tile_options).add_to(&map);

        let group = create_marker_group(config.cluster_markers).map_err(js_err)?;
        group.add_to(&map);

        Ok(Self {
            map,
            markers: LeafletMarkers {
                group,
                on_click: std::rc::Rc::new(on_marker_click),
            },
            user_position: UserPosition::new(),
            locate_max_zoom: config.locate_max_zoom,
        })
    }

    pub fn fly_to(&self, camera: &CameraMove) -> Result<()> {
        let options = serde_wasm_bindgen::to_value(&FlyOptions {
            animate: true,
            duration: camera.duration_secs,
        })
        .map_err(|e| MapError::Leaflet(e.to_string()))?;
        self.map
            .fly_to_with_zoom_and_options(&LatLng::new(camera.lat, camera.lng), camera.zoom, &options);
        Ok(())
    }

    /// Run `f` on the next `moveend`
    pub fn once_move_end(&self, f: impl FnOnce() + 'static) {
        self.map.once("moveend", &Closure::once_into_js(f));
    }

    /// Subscribe to geolocation results for the lifetime of the map
    pub fn on_location(&self, on_found: impl Fn(UserFix) + 'static, on_error: impl Fn(MapError) + 'static) {
        self.map
            .on_location_found(Box::new(move |ev: LocationEvent| on_found(user_fix(&ev))));
        self.map
            .on_location_error(Box::new(move |ev: ErrorEvent| on_error(location_error(&ev))));
    }

    /// Ask the browser for the user's position; the map recenters on success
    pub fn locate(&self) {
        let mut options = LocateOptions::new();
        options.set_view(true).max_zoom(self.locate_max_zoom);
        self.map.locate_with_options(&options);
    }

    /// Replace the user-position overlay
    pub fn show_user_position(&mut self, fix: &UserFix) {
        let center = LatLng::new(fix.lat, fix.lng);

        let circle_options = CircleOptions::new();
        circle_options.set_radius(accuracy_radius(fix.accuracy));
        circle_options.set_color("#3b82f6".to_string());
        circle_options.set_fill_color("#3b82f6".to_string());
        circle_options.set_fill_opacity(0.2);
        circle_options.set_weight(2.0);
        let circle = Circle::new_with_options(&center, &circle_options);
        circle.add_to(&self.map);

        let icon = div_icon(r#"<div class="user-location-marker"></div>"#.to_string(), "user-marker", (16.0, 16.0), None);
        let marker = marker_at(fix.lat, fix.lng, icon);
        marker.add_to(&self.map);
        marker.bind_popup_with_options(&JsValue::from_str("You are here!"), &JsValue::UNDEFINED);
        marker.open_popup();

        if let Some(previous) = self.user_position.place(UserOverlay { circle, marker }) {
            previous.remove();
        }
    }

    /// Tear down the Leaflet map
    pub fn destroy(mut self) {
        if let Some(overlay) = self.user_position.take() {
            overlay.remove();
        }
        self.map.remove();
    }
}
