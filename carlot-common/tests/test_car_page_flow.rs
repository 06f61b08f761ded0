use carlot_common::{
    decode_car_response, derive_image_list, ContactConfig, Gallery, ImageFallbacks, ImageSlot,
    LightboxKey, LightboxState, LoadTracker, PLACEHOLDER_CAR_IMAGE, PLACEHOLDER_ERROR_IMAGE,
};

fn car_body(images: &str, image_url: Option<&str>) -> String {
    let image_url = image_url
        .map(|u| format!(r#","imageUrl":"{u}""#))
        .unwrap_or_default();
    format!(
        r#"{{"success":true,"data":{{"brand":"Hyundai","model":"Creta","price":1150000,"fuelType":"Diesel","mileage":28000,"transmission":"Automatic","seatingCapacity":5,"owners":1,"location":"Bengaluru","images":{images}{image_url}}}}}"#
    )
}

#[test]
fn test_loaded_car_drives_gallery_and_lightbox() {
    let car = decode_car_response(200, &car_body(r#"["front.jpg","side.jpg","rear.jpg"]"#, Some("hero.jpg")))
        .unwrap();
    let images = derive_image_list(Some(&car));
    assert_eq!(
        images.as_slice(),
        ["hero.jpg", "front.jpg", "side.jpg", "rear.jpg"]
    );

    let mut gallery = Gallery::new(images.len());
    gallery.prev();
    assert_eq!(images.get(gallery.active_index()), "rear.jpg");
    gallery.select(1);
    assert_eq!(images.get(gallery.active_index()), "front.jpg");

    gallery.open_lightbox();
    assert_eq!(gallery.lightbox(), LightboxState::Open { index: 1 });
    gallery.handle_key(LightboxKey::ArrowRight);
    gallery.handle_key(LightboxKey::ArrowRight);
    gallery.handle_key(LightboxKey::ArrowRight);
    assert_eq!(gallery.lightbox().index(), Some(0));
    gallery.handle_key(LightboxKey::Escape);

    assert!(!gallery.lightbox().is_open());
    assert_eq!(images.get(gallery.active_index()), "front.jpg");
}

#[test]
fn test_car_without_images_shows_placeholder_without_controls() {
    let car = decode_car_response(200, &car_body("[]", None)).unwrap();
    let images = derive_image_list(Some(&car));
    assert_eq!(images.as_slice(), [PLACEHOLDER_CAR_IMAGE]);

    let gallery = Gallery::new(images.len());
    assert!(!gallery.can_navigate());
    assert!(!images.has_multiple());
}

#[test]
fn test_not_found_response_surfaces_server_message() {
    let mut tracker = LoadTracker::new();
    let ticket = tracker.begin("missing-car");

    let result = decode_car_response(404, r#"{"success":false,"error":"Not found"}"#);
    assert!(tracker.accepts(&ticket));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.message(), "Not found");
}

#[test]
fn test_stale_response_is_dropped_after_navigation() {
    let mut tracker = LoadTracker::new();
    let old = tracker.begin("car-a");
    let new = tracker.begin("car-b");

    let late = decode_car_response(200, &car_body(r#"["a.jpg"]"#, None));
    assert!(late.is_ok());
    assert!(!tracker.accepts(&old));
    assert!(tracker.accepts(&new));
}

#[test]
fn test_broken_thumbnail_does_not_move_indices() {
    let car = decode_car_response(200, &car_body(r#"["a.jpg","b.jpg"]"#, Some("a.jpg"))).unwrap();
    let images = derive_image_list(Some(&car));
    assert_eq!(images.as_slice(), ["a.jpg", "b.jpg"]);

    let mut gallery = Gallery::new(images.len());
    let mut fallbacks = ImageFallbacks::new();
    fallbacks.mark_failed(ImageSlot::Thumbnail(1), images.get(1));
    gallery.next();

    assert_eq!(gallery.active_index(), 1);
    assert_eq!(fallbacks.resolve(ImageSlot::Main, images.get(1)), "b.jpg");
    assert_eq!(
        fallbacks.resolve(ImageSlot::Thumbnail(1), images.get(1)),
        PLACEHOLDER_ERROR_IMAGE
    );
}

#[test]
fn test_contact_links_name_the_car() {
    let car = decode_car_response(200, &car_body("[]", None)).unwrap();
    let contact = ContactConfig::default();
    assert_eq!(contact.call_link(), "tel:9876543210");
    assert_eq!(
        contact.whatsapp_link_for(&car),
        "https://wa.me/919876543210?text=Interested%20in%20Hyundai%20Creta"
    );
    assert_eq!(car.price_label(), "₹11,50,000");
}
