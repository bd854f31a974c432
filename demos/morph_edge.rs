// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames of a navigation bar edge morphing from one item to another.

#[cfg(feature = "std")]
fn main() {
    use morphpath::MorphEdge;

    let length = 1080.0;
    let mut edge = MorphEdge::with_item_count(5);
    edge.select(1);
    edge.select(3);

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        println!("<svg height=\"120\" width=\"{length}\" viewBox=\"0 -80 {length} 120\">");
        match edge.edge_path(length, t) {
            Ok(path) => {
                let d = path.to_svg();
                println!("  <path d=\"{d}\" stroke=\"black\" fill=\"none\" />");
                for circle in edge.circles(length, t).unwrap_or_default() {
                    let color = if circle.direction.is_clockwise() {
                        "red"
                    } else {
                        "blue"
                    };
                    let (x, y) = circle.center.into();
                    let r = circle.radius;
                    println!(
                        "  <circle cx=\"{x}\" cy=\"{y}\" r=\"{r}\" stroke=\"{color}\" fill=\"none\" />"
                    );
                }
            }
            Err(e) => println!("  <!-- {e} -->"),
        }
        println!("</svg>");
    }
    println!("</body>");
    println!("</html>");
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
