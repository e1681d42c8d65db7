//! Per-deployment branding lookup
//!
//! Pure configuration: maps the origin host of the table link to the venue
//! name shown in the header. Lives outside the workflow core.

/// Fallback header title when the host is unknown
const DEFAULT_VENUE: &str = "Factura Electrónica";

/// Venue title for a link origin host
pub fn venue_for_host(host: Option<&str>) -> &'static str {
    match host {
        Some("factura.bandidos.com.co") => "Bandidos",
        Some("factura.cocinandosonrisas.co") => "Cocinando Sonrisas",
        _ => DEFAULT_VENUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_host_maps_to_venue() {
        assert_eq!(venue_for_host(Some("factura.bandidos.com.co")), "Bandidos");
    }

    #[test]
    fn test_unknown_host_falls_back() {
        assert_eq!(venue_for_host(Some("localhost")), DEFAULT_VENUE);
        assert_eq!(venue_for_host(None), DEFAULT_VENUE);
    }
}
