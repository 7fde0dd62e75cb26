use crate::constants::{LEAFLET_CSS_URL, LEAFLET_JS_URL};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Earthquakes and Tectonic Plates</title>
  <link rel="stylesheet" href="__LEAFLET_CSS__">
  <style>
    html, body, #map { height: 100%; margin: 0; }
    .info.legend { background: white; padding: 6px 8px; line-height: 18px; color: #555; border-radius: 5px; }
    .info.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.7; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="__LEAFLET_JS__"></script>
  <script>
    function loadOverlay(source, group) {
      fetch(source)
        .then(function (response) {
          if (!response.ok) {
            throw new Error(source + " returned " + response.status);
          }
          return response.json();
        })
        .then(function (data) {
          L.geoJSON(data, {
            pointToLayer: function (feature, latLng) {
              return L.circleMarker(latLng, feature.properties.style);
            },
            style: function (feature) {
              return feature.properties.style;
            },
            onEachFeature: function (feature, layer) {
              if (feature.properties.popup) {
                layer.bindPopup(feature.properties.popup);
              }
            }
          }).addTo(group);
        })
        .catch(function (error) {
          console.warn("overlay unavailable", error);
        });
    }

    fetch("/api/map")
      .then(function (response) { return response.json(); })
      .then(function (context) {
        var map = L.map("map", { center: context.view.center, zoom: context.view.zoom });

        var basemaps = {};
        context.basemaps.forEach(function (basemap) {
          var options = { maxZoom: basemap.maxZoom, attribution: basemap.attribution };
          if (basemap.minZoom !== undefined) {
            options.minZoom = basemap.minZoom;
          }
          if (basemap.ext) {
            options.ext = basemap.ext;
          }
          basemaps[basemap.name] = L.tileLayer(basemap.urlTemplate, options);
        });
        basemaps[context.defaultBasemap].addTo(map);

        var overlays = {};
        context.overlays.forEach(function (overlay) {
          var group = L.layerGroup();
          overlays[overlay.name] = group;
          if (overlay.visible) {
            group.addTo(map);
          }
          loadOverlay(overlay.source, group);
        });

        L.control.layers(basemaps, overlays).addTo(map);

        var legend = L.control({ position: context.legend.position });
        legend.onAdd = function () {
          var div = L.DomUtil.create("div", "info legend");
          div.innerHTML = context.legend.html;
          return div;
        };
        legend.addTo(map);
      });
  </script>
</body>
</html>
"#;

pub fn render_page() -> String {
    PAGE_TEMPLATE
        .replace("__LEAFLET_CSS__", LEAFLET_CSS_URL)
        .replace("__LEAFLET_JS__", LEAFLET_JS_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_leaflet_and_map_context() {
        let page = render_page();
        assert!(page.contains(LEAFLET_CSS_URL));
        assert!(page.contains(LEAFLET_JS_URL));
        assert!(page.contains("fetch(\"/api/map\")"));
        assert!(!page.contains("__LEAFLET"));
    }
}
