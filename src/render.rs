//! Renders the current conditions fragment.
//! See [`render_current_conditions()`].

use std::fmt::Write;

use html_builder::Html5;

use crate::{condition::CurrentConditions, icons};

/// Yahoo's data license requires this attribution to be displayed alongside
/// its weather data. Do not alter it.
const ATTRIBUTION_HREF: &str = "https://www.yahoo.com/?ilc=401";
const ATTRIBUTION_IMAGE_SRC: &str = "https://poweredby.yahoo.com/purple.png";

/// Build the HTML fragment displaying `condition`: a linked weather icon,
/// the temperature with its unit string, and the fixed Yahoo attribution.
///
/// An unmapped weather code degrades silently to an icon element with no
/// icon class.
pub fn render_current_conditions(condition: &CurrentConditions) -> eyre::Result<String> {
    let mut buf = html_builder::Buffer::new();
    let mut media = buf.div().attr(r#"class="media""#);

    let mut media_left = media.div().attr(r#"class="media-left""#);
    let icon_href = format!(r#"href="{}""#, condition.link);
    let mut icon_link = media_left.a().attr(&icon_href).attr(r#"target="_blank""#);
    let icon_class = match icons::icon_class(&condition.code) {
        Some(class) => format!(r#"class="wi {class}""#),
        None => r#"class="wi""#.to_string(),
    };
    icon_link
        .i()
        .attr(&icon_class)
        .attr(r#"style="line-height:1.5; font-size: 1.5em;""#);

    let mut media_body = media.div().attr(r#"class="media-body""#);
    let mut heading = media_body.h4().attr(r#"class="media-heading""#);
    write!(heading.span(), "{}{}", condition.temperature, condition.units)?;
    let attribution_href = format!(r#"href="{ATTRIBUTION_HREF}""#);
    let attribution_src = format!(r#"src="{ATTRIBUTION_IMAGE_SRC}""#);
    let mut attribution = heading.a().attr(&attribution_href).attr(r#"target="_blank""#);
    attribution
        .img()
        .attr(&attribution_src)
        .attr(r#"width="134""#)
        .attr(r#"height="29""#);

    Ok(buf.finish())
}
