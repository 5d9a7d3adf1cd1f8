//! Named CSS colors.
//!
//! The table covers the basic CSS keywords plus the extended names that
//! show up in hand-written documentation stylesheets. Lookup is by
//! lowercased name.

use phf::phf_map;

pub(crate) static NAMED_COLORS: phf::Map<&'static str, [u8; 3]> = phf_map! {
    "black" => [0, 0, 0],
    "white" => [255, 255, 255],
    "red" => [255, 0, 0],
    "green" => [0, 128, 0],
    "blue" => [0, 0, 255],
    "yellow" => [255, 255, 0],
    "cyan" => [0, 255, 255],
    "aqua" => [0, 255, 255],
    "magenta" => [255, 0, 255],
    "fuchsia" => [255, 0, 255],
    "aliceblue" => [240, 248, 255],
    "aquamarine" => [127, 255, 212],
    "azure" => [240, 255, 255],
    "beige" => [245, 245, 220],
    "brown" => [165, 42, 42],
    "chocolate" => [210, 105, 30],
    "coral" => [255, 127, 80],
    "cornflowerblue" => [100, 149, 237],
    "crimson" => [220, 20, 60],
    "darkblue" => [0, 0, 139],
    "darkgray" => [169, 169, 169],
    "darkgrey" => [169, 169, 169],
    "darkgreen" => [0, 100, 0],
    "darkorange" => [255, 140, 0],
    "darkred" => [139, 0, 0],
    "darkviolet" => [148, 0, 211],
    "deeppink" => [255, 20, 147],
    "deepskyblue" => [0, 191, 255],
    "dimgray" => [105, 105, 105],
    "dimgrey" => [105, 105, 105],
    "dodgerblue" => [30, 144, 255],
    "firebrick" => [178, 34, 34],
    "forestgreen" => [34, 139, 34],
    "gainsboro" => [220, 220, 220],
    "gold" => [255, 215, 0],
    "goldenrod" => [218, 165, 32],
    "gray" => [128, 128, 128],
    "grey" => [128, 128, 128],
    "hotpink" => [255, 105, 180],
    "indianred" => [205, 92, 92],
    "indigo" => [75, 0, 130],
    "ivory" => [255, 255, 240],
    "khaki" => [240, 230, 140],
    "lavender" => [230, 230, 250],
    "lightblue" => [173, 216, 230],
    "lightcoral" => [240, 128, 128],
    "lightgray" => [211, 211, 211],
    "lightgrey" => [211, 211, 211],
    "lightgreen" => [144, 238, 144],
    "lightpink" => [255, 182, 193],
    "lightseagreen" => [32, 178, 170],
    "lightskyblue" => [135, 206, 250],
    "lime" => [0, 255, 0],
    "limegreen" => [50, 205, 50],
    "maroon" => [128, 0, 0],
    "midnightblue" => [25, 25, 112],
    "navy" => [0, 0, 128],
    "olive" => [128, 128, 0],
    "orange" => [255, 165, 0],
    "orangered" => [255, 69, 0],
    "orchid" => [218, 112, 214],
    "peru" => [205, 133, 63],
    "pink" => [255, 192, 203],
    "plum" => [221, 160, 221],
    "powderblue" => [176, 224, 230],
    "purple" => [128, 0, 128],
    "rebeccapurple" => [102, 51, 153],
    "royalblue" => [65, 105, 225],
    "salmon" => [250, 128, 114],
    "seagreen" => [46, 139, 87],
    "sienna" => [160, 82, 45],
    "silver" => [192, 192, 192],
    "skyblue" => [135, 206, 235],
    "slateblue" => [106, 90, 205],
    "slategray" => [112, 128, 144],
    "slategrey" => [112, 128, 144],
    "snow" => [255, 250, 250],
    "springgreen" => [0, 255, 127],
    "steelblue" => [70, 130, 180],
    "tan" => [210, 180, 140],
    "teal" => [0, 128, 128],
    "thistle" => [216, 191, 216],
    "tomato" => [255, 99, 71],
    "turquoise" => [64, 224, 208],
    "violet" => [238, 130, 238],
    "wheat" => [245, 222, 179],
    "whitesmoke" => [245, 245, 245],
    "yellowgreen" => [154, 205, 50],
};
