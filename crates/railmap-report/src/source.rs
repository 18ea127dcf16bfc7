use anyhow::Result;
use railmap_model::GameMap;

/// Generate a TypeScript map module for shipping with the game client,
/// mirroring the hand-written map modules it sits next to: a typed
/// `export const` holding the map literal.
pub fn to_source_module(map: &GameMap) -> Result<String> {
    let ident = module_identifier(&map.metadata.name);
    let body = serde_json::to_string_pretty(map)?;
    Ok(format!(
        "import {{ GameMap }} from '@/lib/types/metro-types';\n\n\
         export const {ident}: GameMap = {body};\n"
    ))
}

/// Derive a lowerCamelCase identifier from the map name, e.g.
/// "South Korean Rail Network" -> "southKoreanRailNetworkMap".
fn module_identifier(name: &str) -> String {
    let mut ident = String::new();
    for (index, word) in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_ascii_lowercase();
        if index == 0 {
            ident.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                ident.push(first.to_ascii_uppercase());
                ident.push_str(chars.as_str());
            }
        }
    }
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "map");
    }
    if !ident.to_ascii_lowercase().ends_with("map") {
        ident.push_str("Map");
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_from_map_name() {
        assert_eq!(module_identifier("Untitled Map"), "untitledMap");
        assert_eq!(
            module_identifier("South Korean Rail Network"),
            "southKoreanRailNetworkMap"
        );
        assert_eq!(module_identifier("3rd Avenue"), "map3rdAvenueMap");
        assert_eq!(module_identifier(""), "mapMap");
    }

    #[test]
    fn module_wraps_the_json_literal() {
        let map = GameMap::new_untitled();
        let module = to_source_module(&map).unwrap();
        assert!(module.starts_with("import { GameMap } from '@/lib/types/metro-types';"));
        assert!(module.contains("export const untitledMap: GameMap = {"));
        assert!(module.contains("\"railNetwork\""));
        assert!(module.trim_end().ends_with("};"));
    }
}
