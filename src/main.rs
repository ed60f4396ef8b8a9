use log::info;
use spherical_mercator_rs::{BBox, MercatorError, SphericalMercator};

fn main() -> Result<(), MercatorError> {
    env_logger::init();

    let merc = SphericalMercator::new();
    let zoom = 12;

    let (lon, lat) = (-2.2479699500757597, 53.48082746395233);
    let px = merc.to_pixel(&(lon, lat), zoom)?;
    println!("Pixel: ({}, {})", px.x(), px.y());

    let meters = merc.forward(&(lon, lat));
    println!("Mercator: ({}, {})", meters.x(), meters.y());

    let bbox = BBox::new(-2.3, 53.4, -2.2, 53.5);
    let range = merc.bbox_to_tile_range(bbox, zoom)?;
    info!("{} tiles at zoom {}", range.len(), zoom);
    println!("Tiles: {:?}", range.to_array());

    for (x, y) in range.iter() {
        let tile = merc.tile_bbox(x, y, zoom)?;
        println!("{}/{}/{}: {:?}", zoom, x, y, tile.to_array());
    }

    Ok(())
}
