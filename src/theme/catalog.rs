//! The built-in palette table, validated into a `Catalog` at startup.
//!
//! Accent order: gpu, cpu, mem, net, proc_cpu, proc_mem.
//! Threshold order: normal, warning, critical.

pub struct ThemeSpec {
    pub name: &'static str,
    pub accents: [&'static str; 6],
    pub stops: &'static [&'static str],
    pub thresholds: [&'static str; 3],
}

const fn theme(
    name: &'static str,
    accents: [&'static str; 6],
    stops: &'static [&'static str],
    thresholds: [&'static str; 3],
) -> ThemeSpec {
    ThemeSpec {
        name,
        accents,
        stops,
        thresholds,
    }
}

#[rustfmt::skip]
pub const THEMES: &[ThemeSpec] = &[
    theme("Default", ["#800080", "#008080", "#008000", "#008080", "#008080", "#008000"], &["#008000", "#800000"], ["#008000", "#808000", "#800000"]),
    theme("Monokai", ["#ff00ff", "#00ffff", "#00ff00", "#00ffff", "#00ffff", "#00ff00"], &["#008000", "#800000"], ["#008000", "#808000", "#800000"]),
    theme("Dracula", ["#bd93f9", "#8be9fd", "#50fa7b", "#8be9fd", "#8be9fd", "#50fa7b"], &["#50fa7b", "#ff5555"], ["#50fa7b", "#f1fa8c", "#ff5555"]),
    theme("Nord", ["#b48ead", "#88c0d0", "#a3be8c", "#88c0d0", "#88c0d0", "#a3be8c"], &["#a3be8c", "#bf616a"], ["#a3be8c", "#ebcb8b", "#bf616a"]),
    theme("Solarized", ["#d33682", "#2aa198", "#859900", "#2aa198", "#2aa198", "#859900"], &["#859900", "#b58900", "#dc322f"], ["#859900", "#b58900", "#dc322f"]),
    theme("Gruvbox", ["#d3869b", "#83a598", "#b8bb26", "#83a598", "#83a598", "#b8bb26"], &["#b8bb26", "#fb4934"], ["#b8bb26", "#fabd2f", "#fb4934"]),
    theme("One Dark", ["#c678dd", "#56b6c2", "#98c379", "#56b6c2", "#56b6c2", "#98c379"], &["#98c379", "#e06c75"], ["#98c379", "#e5c07b", "#e06c75"]),
    theme("Tokyo Night", ["#bb9af7", "#7dcfff", "#9ece6a", "#7dcfff", "#7dcfff", "#9ece6a"], &["#9ece6a", "#e0af68", "#f7768e"], ["#9ece6a", "#e0af68", "#f7768e"]),
    theme("Catppuccin Mocha", ["#cba6f7", "#89dceb", "#a6e3a1", "#89dceb", "#89dceb", "#a6e3a1"], &["#a6e3a1", "#f38ba8"], ["#a6e3a1", "#f9e2af", "#f38ba8"]),
    theme("Catppuccin Latte", ["#8839ef", "#04a5e5", "#40a02b", "#04a5e5", "#04a5e5", "#40a02b"], &["#40a02b", "#d20f39"], ["#40a02b", "#df8e1d", "#d20f39"]),
    theme("Rosé Pine", ["#c4a7e7", "#9ccfd8", "#31748f", "#9ccfd8", "#9ccfd8", "#31748f"], &["#31748f", "#eb6f92"], ["#31748f", "#f6c177", "#eb6f92"]),
    theme("Everforest", ["#d699b6", "#7fbbb3", "#a7c080", "#7fbbb3", "#7fbbb3", "#a7c080"], &["#a7c080", "#e67e80"], ["#a7c080", "#dbbc7f", "#e67e80"]),
    theme("Kanagawa", ["#957fb8", "#7e9cd8", "#98bb6c", "#7e9cd8", "#7e9cd8", "#98bb6c"], &["#98bb6c", "#c34043"], ["#98bb6c", "#e6c384", "#c34043"]),
    theme("Monochrome", ["#c0c0c0", "#c0c0c0", "#c0c0c0", "#c0c0c0", "#c0c0c0", "#c0c0c0"], &["#ffffff", "#c0c0c0", "#808080"], ["#ffffff", "#c0c0c0", "#808080"]),
    theme("Green Screen", ["#008000", "#008000", "#008000", "#008000", "#008000", "#008000"], &["#00ff00", "#008000", "#005f00"], ["#00ff00", "#008000", "#005f00"]),
    theme("Amber", ["#ffbf00", "#ffbf00", "#ffbf00", "#ffbf00", "#ffbf00", "#ffbf00"], &["#ffd700", "#ffbf00", "#ff8c00"], ["#ffd700", "#ffbf00", "#ff8c00"]),
    theme("Phosphor", ["#33ff00", "#33ff00", "#33ff00", "#33ff00", "#33ff00", "#33ff00"], &["#66ff33", "#33ff00", "#009900"], ["#66ff33", "#33ff00", "#009900"]),
    theme("Ocean", ["#6c5ce7", "#0984e3", "#00b894", "#0984e3", "#0984e3", "#00b894"], &["#00b894", "#d63031"], ["#00b894", "#fdcb6e", "#d63031"]),
    theme("Sunset", ["#e17055", "#fdcb6e", "#fab1a0", "#fdcb6e", "#fdcb6e", "#fab1a0"], &["#ffeaa7", "#e17055", "#d63031"], ["#ffeaa7", "#e17055", "#d63031"]),
    theme("Forest", ["#00b894", "#55efc4", "#00cec9", "#55efc4", "#55efc4", "#00cec9"], &["#55efc4", "#e17055"], ["#55efc4", "#ffeaa7", "#e17055"]),
    theme("Lava", ["#ff6348", "#ff4757", "#ff6b81", "#ff4757", "#ff4757", "#ff6b81"], &["#ffa502", "#ff6348", "#ff3838"], ["#ffa502", "#ff6348", "#ff3838"]),
    theme("Arctic", ["#dfe6e9", "#74b9ff", "#81ecec", "#74b9ff", "#74b9ff", "#81ecec"], &["#81ecec", "#74b9ff", "#a29bfe"], ["#81ecec", "#74b9ff", "#a29bfe"]),
    theme("Sakura", ["#fd79a8", "#e84393", "#fab1a0", "#e84393", "#e84393", "#fab1a0"], &["#fab1a0", "#fd79a8", "#e84393"], ["#fab1a0", "#fd79a8", "#e84393"]),
    theme("Mint", ["#00b894", "#00cec9", "#55efc4", "#00cec9", "#00cec9", "#55efc4"], &["#55efc4", "#ff7675"], ["#55efc4", "#81ecec", "#ff7675"]),
    theme("Lavender", ["#a29bfe", "#6c5ce7", "#dfe6e9", "#6c5ce7", "#6c5ce7", "#dfe6e9"], &["#a29bfe", "#fd79a8"], ["#a29bfe", "#6c5ce7", "#fd79a8"]),
    theme("Coral", ["#ff7675", "#fab1a0", "#ffeaa7", "#fab1a0", "#fab1a0", "#ffeaa7"], &["#ffeaa7", "#ff7675", "#d63031"], ["#ffeaa7", "#ff7675", "#d63031"]),
    theme("Cyberpunk", ["#ff00ff", "#00ffff", "#ff00aa", "#00ffff", "#00ffff", "#ff00aa"], &["#00ff00", "#ff0000"], ["#00ff00", "#ffff00", "#ff0000"]),
    theme("Neon", ["#ff6ec7", "#00ffff", "#39ff14", "#00ffff", "#00ffff", "#39ff14"], &["#39ff14", "#ff073a"], ["#39ff14", "#ffff00", "#ff073a"]),
    theme("Synthwave", ["#f72585", "#4cc9f0", "#7209b7", "#4cc9f0", "#4cc9f0", "#7209b7"], &["#4cc9f0", "#f72585", "#ff0a54"], ["#4cc9f0", "#f72585", "#ff0a54"]),
    theme("Vaporwave", ["#ff71ce", "#01cdfe", "#05ffa1", "#01cdfe", "#01cdfe", "#05ffa1"], &["#05ffa1", "#ff71ce"], ["#05ffa1", "#b967ff", "#ff71ce"]),
    theme("Matrix", ["#00ff41", "#008f11", "#003b00", "#008f11", "#008f11", "#003b00"], &["#00ff41", "#008f11", "#003b00"], ["#00ff41", "#008f11", "#003b00"]),
    theme("Pastel", ["#c39bd3", "#85c1e9", "#82e0aa", "#85c1e9", "#85c1e9", "#82e0aa"], &["#82e0aa", "#f1948a"], ["#82e0aa", "#f9e79f", "#f1948a"]),
    theme("Soft", ["#bb8fce", "#76d7c4", "#7dcea0", "#76d7c4", "#76d7c4", "#7dcea0"], &["#7dcea0", "#ec7063"], ["#7dcea0", "#f0b27a", "#ec7063"]),
    theme("Cotton Candy", ["#ffb3ba", "#bae1ff", "#baffc9", "#bae1ff", "#bae1ff", "#baffc9"], &["#baffc9", "#ffb3ba"], ["#baffc9", "#ffffba", "#ffb3ba"]),
    theme("Ice Cream", ["#ff9a9e", "#a1c4fd", "#c2e9fb", "#a1c4fd", "#a1c4fd", "#c2e9fb"], &["#c2e9fb", "#ff9a9e"], ["#c2e9fb", "#ffecd2", "#ff9a9e"]),
    theme("Electric", ["#7b2ff7", "#00d4ff", "#00ff87", "#00d4ff", "#00d4ff", "#00ff87"], &["#00ff87", "#ff0055"], ["#00ff87", "#ffd000", "#ff0055"]),
    theme("Inferno", ["#ff4500", "#ff6a00", "#ff8c00", "#ff6a00", "#ff6a00", "#ff8c00"], &["#ffd700", "#ff8c00", "#ff0000"], ["#ffd700", "#ff8c00", "#ff0000"]),
    theme("Glacier", ["#e0f7fa", "#80deea", "#4dd0e1", "#80deea", "#80deea", "#4dd0e1"], &["#80deea", "#4dd0e1", "#00838f"], ["#80deea", "#4dd0e1", "#00838f"]),
    theme("Twilight", ["#7c4dff", "#448aff", "#18ffff", "#448aff", "#448aff", "#18ffff"], &["#18ffff", "#7c4dff", "#ff1744"], ["#18ffff", "#7c4dff", "#ff1744"]),
    theme("Autumn", ["#d35400", "#e67e22", "#f39c12", "#e67e22", "#e67e22", "#f39c12"], &["#f1c40f", "#e67e22", "#c0392b"], ["#f1c40f", "#e67e22", "#c0392b"]),
    theme("Spring", ["#e91e63", "#00bcd4", "#8bc34a", "#00bcd4", "#00bcd4", "#8bc34a"], &["#8bc34a", "#f44336"], ["#8bc34a", "#ffeb3b", "#f44336"]),
    theme("Summer", ["#ff9800", "#03a9f4", "#4caf50", "#03a9f4", "#03a9f4", "#4caf50"], &["#4caf50", "#f44336"], ["#4caf50", "#ffeb3b", "#f44336"]),
    theme("Winter", ["#9c27b0", "#3f51b5", "#607d8b", "#3f51b5", "#3f51b5", "#607d8b"], &["#607d8b", "#e91e63"], ["#607d8b", "#9c27b0", "#e91e63"]),
    theme("High Contrast", ["#ff00ff", "#00ffff", "#00ff00", "#00ffff", "#00ffff", "#00ff00"], &["#00ff00", "#ff0000"], ["#00ff00", "#ffff00", "#ff0000"]),
    theme("Blueprint", ["#4fc3f7", "#29b6f6", "#03a9f4", "#29b6f6", "#29b6f6", "#03a9f4"], &["#4fc3f7", "#0288d1", "#01579b"], ["#4fc3f7", "#0288d1", "#01579b"]),
    theme("Redshift", ["#ef5350", "#e53935", "#c62828", "#e53935", "#e53935", "#c62828"], &["#ef9a9a", "#ef5350", "#b71c1c"], ["#ef9a9a", "#ef5350", "#b71c1c"]),
    theme("Emerald", ["#66bb6a", "#43a047", "#2e7d32", "#43a047", "#43a047", "#2e7d32"], &["#a5d6a7", "#66bb6a", "#1b5e20"], ["#a5d6a7", "#66bb6a", "#1b5e20"]),
    theme("Royal", ["#7e57c2", "#5c6bc0", "#42a5f5", "#5c6bc0", "#5c6bc0", "#42a5f5"], &["#42a5f5", "#7e57c2", "#d32f2f"], ["#42a5f5", "#7e57c2", "#d32f2f"]),
    theme("Bubblegum", ["#ff77a9", "#ff99cc", "#ffb3d9", "#ff99cc", "#ff99cc", "#ffb3d9"], &["#ffb3d9", "#ff77a9", "#ff3385"], ["#ffb3d9", "#ff77a9", "#ff3385"]),
    theme("Horizon", ["#e95678", "#fab795", "#25b0bc", "#fab795", "#fab795", "#25b0bc"], &["#25b0bc", "#e95678"], ["#25b0bc", "#fab795", "#e95678"]),
];
