#![allow(non_snake_case)]

use super::*;
use crate::types::StaticTypeTable;
use test_case::test_case;

fn spec(class: &str, fields: &[&str]) -> ClassSpec {
    ClassSpec::new("", class, fields.iter().copied())
}

fn json_spec(class: &str, fields: &[&str]) -> ClassSpec {
    spec(class, fields).with_options(GenerationOptions::default().with_json_deserialize(true))
}

fn render(spec: &ClassSpec) -> String {
    generate(spec, &StaticTypeTable::default())
}

fn lines(code: &str) -> Vec<&str> {
    code.lines().map(str::trim).collect()
}

// Default constructor shape

#[test]
fn generate___player_data___exact_output() {
    let spec = spec("player_data", &["int health", "string name"]);

    let code = generate_with_indent(&spec, &StaticTypeTable::default(), "    ");

    // Blank lines carry the current indent
    let expected = [
        "using UnityEngine;",
        "using VRC.SDK3.Data;",
        "",
        "// Enum for assigning index of field DataTokens",
        "enum PlayerDataField",
        "{",
        "    Health,",
        "    Name,",
        "    ",
        "    Count",
        "}",
        "",
        "public class PlayerData : DataList",
        "{",
        "    // Constructor",
        "    public static PlayerData New(int health, string name)",
        "    {",
        "        var data = new DataToken[(int)PlayerDataField.Count];",
        "        ",
        "        data[(int)PlayerDataField.Health] = health;",
        "        data[(int)PlayerDataField.Name] = name;",
        "        ",
        "        return (PlayerData)new DataList(data);",
        "    }",
        "}",
        "",
        "public static class PlayerDataExt",
        "{",
        "    // Get methods",
        "    public static int Health(this PlayerData instance)",
        "        => (int)instance[(int)PlayerDataField.Health];",
        "    public static string Name(this PlayerData instance)",
        "        => (string)instance[(int)PlayerDataField.Name];",
        "    ",
        "    // Set methods",
        "    public static void Health(this PlayerData instance, int arg)",
        "        => instance[(int)PlayerDataField.Health] = arg;",
        "    public static void Name(this PlayerData instance, string arg)",
        "        => instance[(int)PlayerDataField.Name] = arg;",
        "}",
        "",
    ]
    .join("\n");
    assert_eq!(code, expected);
}

#[test]
fn generate___default_indent___is_tab() {
    let code = render(&spec("Item", &["int id"]));

    assert!(code.contains("\n\tId,\n"));
    assert!(code.contains("\n\t\t=> (int)instance[(int)ItemField.Id];\n"));
}

#[test]
fn generate___malformed_field___skipped_everywhere() {
    let code = render(&spec("Item", &["int a", "badfield", "float b"]));

    assert!(code.contains("public static Item New(int a, float b)"));
    assert!(!code.to_lowercase().contains("badfield"));
    let members: Vec<&str> = lines(&code)
        .into_iter()
        .filter(|l| *l == "A," || *l == "B,")
        .collect();
    assert_eq!(members, vec!["A,", "B,"]);
}

#[test]
fn generate___no_valid_fields___still_emits_count_only_enum() {
    let code = render(&spec("Empty", &["", "x"]));

    assert!(code.contains("enum EmptyField\n{\n\t\n\tCount\n}"));
    assert!(code.contains("public static Empty New()"));
}

#[test_case(&["int a"], 1)]
#[test_case(&["int a", "bool b", "string c"], 3)]
#[test_case(&["int a", "junk", "", "float d"], 2)]
fn generate___enum_members___match_valid_field_count(fields: &[&str], expected: usize) {
    let code = render(&spec("Counted", fields));

    let enum_body = code
        .split("enum CountedField\n{\n")
        .nth(1)
        .and_then(|rest| rest.split("Count\n").next())
        .unwrap();
    let members = enum_body.lines().filter(|l| l.trim().ends_with(',')).count();
    assert_eq!(members, expected);
}

#[test]
fn generate___set_accessors_disabled___omits_set_section() {
    let spec = spec("Item", &["int id", "string label"])
        .with_options(GenerationOptions::default().with_set_accessors(false));

    let code = render(&spec);

    assert!(!code.contains("// Set methods"));
    assert!(!code.contains("public static void"));
    assert!(code.contains("public static int Id(this Item instance)"));
}

#[test]
fn generate___namespace___wraps_and_indents_everything() {
    let spec = ClassSpec::new("Game.Data", "Item", ["int id"]);

    let code = render(&spec);

    assert!(code.starts_with("using UnityEngine;\nusing VRC.SDK3.Data;\n\nnamespace Game.Data\n{\n"));
    assert!(code.contains("\n\tenum ItemField\n"));
    assert!(code.contains("\n\tpublic class Item : DataList\n"));
    assert!(code.contains("\n\t\t\t=> (int)instance[(int)ItemField.Id];\n"));
    assert!(code.ends_with("\t}\n}\n"));
}

#[test]
fn generate___pascal_cases_identifiers_but_keeps_parameter_names() {
    let code = render(&spec("inventory_slot", &["int item_count"]));

    assert!(code.contains("public class InventorySlot : DataList"));
    assert!(code.contains("public static InventorySlot New(int item_count)"));
    assert!(code.contains("data[(int)InventorySlotField.ItemCount] = item_count;"));
    assert!(code.contains("public static int ItemCount(this InventorySlot instance)"));
}

// Boxed storage

#[test]
fn generate___boxed_types___wrapped_and_read_through_reference() {
    let code = render(&spec("Loadout", &["int[] ammo", "GameObject weapon", "decimal price"]));

    assert!(code.contains("data[(int)LoadoutField.Ammo] = new DataToken(ammo);"));
    assert!(code.contains("data[(int)LoadoutField.Weapon] = new DataToken(weapon);"));
    assert!(code.contains("data[(int)LoadoutField.Price] = new DataToken(price);"));
    assert!(code.contains("=> (int[])instance[(int)LoadoutField.Ammo].Reference;"));
    assert!(code.contains("=> (GameObject)instance[(int)LoadoutField.Weapon].Reference;"));
    assert!(code.contains("=> instance[(int)LoadoutField.Ammo] = new DataToken(arg);"));
}

#[test]
fn generate___enum_from_lookup___is_boxed() {
    let spec = spec("Weapon", &["WeaponKind kind"]);
    let table = StaticTypeTable::default().with_enums(["WeaponKind"]);

    let code = generate(&spec, &table);

    assert!(code.contains("data[(int)WeaponField.Kind] = new DataToken(kind);"));
    assert!(code.contains("=> (WeaponKind)instance[(int)WeaponField.Kind].Reference;"));
}

#[test]
fn generate___nested_class___stored_inline() {
    let code = render(&spec("Player", &["Inventory bag"]));

    assert!(code.contains("data[(int)PlayerField.Bag] = bag;"));
    assert!(code.contains("=> (Inventory)instance[(int)PlayerField.Bag];"));
}

// JSON constructor shape

#[test]
fn generate___json_mode___emits_load_comment_with_alt_keys() {
    let code = render(&json_spec("Profile", &["string display_name displayName", "int level"]));

    assert!(code.contains("\t// This comments for loading this script by generator : \n"));
    assert!(code.contains(
        "\t// public static Profile New(string display_name displayName, int level)\n"
    ));
    assert!(code.contains("\tpublic static Profile New(DataDictionary dic)\n"));
    assert!(code.contains("var display_name = dic[\"displayName\"].String;"));
    assert!(code.contains("var level = (int)dic[\"level\"].Number;"));
    assert!(code.contains("// Make DataTokens"));
    assert!(code.contains("data[(int)ProfileField.DisplayName] = display_name;"));
}

#[test]
fn generate___json_vector3___reads_three_components() {
    let code = render(&json_spec("Spawn", &["Vector3 pos"]));

    let expected = "\
\t\t
\t\tvar posData = dic[\"pos\"].DataDictionary;
\t\tvar posX = (float)posData[\"x\"].Number;
\t\tvar posY = (float)posData[\"y\"].Number;
\t\tvar posZ = (float)posData[\"z\"].Number;
\t\tvar pos = new Vector3(posX, posY, posZ);
";
    assert!(code.contains(expected));
    assert!(!code.contains("posW"));
}

#[test]
fn generate___json_vector_as_list___reads_by_index() {
    let spec = spec("Spawn", &["Vector2 pos"]).with_options(
        GenerationOptions::default()
            .with_json_deserialize(true)
            .with_vector_as_list(true),
    );

    let code = render(&spec);

    assert!(code.contains("var posData = dic[\"pos\"].DataList;"));
    assert!(code.contains("var posX = (float)posData[0].Number;"));
    assert!(code.contains("var posY = (float)posData[1].Number;"));
    assert!(code.contains("var pos = new Vector2(posX, posY);"));
}

#[test]
fn generate___json_color32___casts_components_to_byte() {
    let code = render(&json_spec("Paint", &["Color32 tint"]));

    assert!(code.contains("var tintR = (byte)tintData[\"r\"].Number;"));
    assert!(code.contains("var tintA = (byte)tintData[\"a\"].Number;"));
    assert!(code.contains("var tint = new Color32(tintR, tintG, tintB, tintA);"));
}

#[test]
fn generate___json_int_array___single_loop_body() {
    let code = render(&json_spec("Stats", &["int[] values"]));

    let expected = "\
\t\t
\t\tvar valuesList = dic[\"values\"].DataList;
\t\tvar valuesCount = valuesList.Count;
\t\tvar values = new int[valuesCount];
\t\tfor (int i = 0; i < valuesCount; i++)
\t\t{
\t\t\tvalues[i] = (int)valuesList[i].Number;
\t\t}
";
    assert!(code.contains(expected));
    assert_eq!(code.matches("for (int i = 0;").count(), 1);
    assert!(code.contains("data[(int)StatsField.Values] = new DataToken(values);"));
}

#[test]
fn generate___json_vector_array___rebuilds_each_element() {
    let code = render(&json_spec("Path", &["Vector2[] points"]));

    let expected = "\
\t\t{
\t\t\tvar pointsData = pointsList[i].DataDictionary;
\t\t\tvar pointsX = (float)pointsData[\"x\"].Number;
\t\t\tvar pointsY = (float)pointsData[\"y\"].Number;
\t\t\tpoints[i] = new Vector2(pointsX, pointsY);
\t\t}
";
    assert!(code.contains(expected));
}

#[test]
fn generate___json_nested_and_nested_array___call_new() {
    let code = render(&json_spec("Party", &["Player leader", "Player[] members"]));

    assert!(code.contains("var leader = Player.New(dic[\"leader\"].DataDictionary);"));
    assert!(code.contains("members[i] = Player.New(membersList[i].DataDictionary);"));
}

#[test]
fn generate___json_enum___casts_through_int() {
    let spec = json_spec("Weapon", &["WeaponKind kind"]);
    let table = StaticTypeTable::default().with_enums(["WeaponKind"]);

    let code = generate(&spec, &table);

    assert!(code.contains("var kind = (WeaponKind)(int)dic[\"kind\"].Number;"));
}

#[test_case("bool flag", "var flag = dic[\"flag\"].Boolean;")]
#[test_case("char initial", "var initial = dic[\"initial\"].String[0];")]
#[test_case("double ratio", "var ratio = (double)dic[\"ratio\"].Number;")]
#[test_case("DataList raw", "var raw = dic[\"raw\"].DataList;")]
#[test_case("DataDictionary meta", "var meta = dic[\"meta\"].DataDictionary;")]
#[test_case("GameObject target", "var target = (GameObject)dic[\"target\"].Reference;")]
#[test_case("decimal price", "var price = (decimal)dic[\"price\"].Reference;")]
#[test_case("object blob", "var blob = (object)dic[\"blob\"].Reference;")]
fn generate___json_scalar_decode_rules(field: &str, expected: &str) {
    let code = render(&json_spec("Row", &[field]));

    assert!(code.contains(expected), "missing `{expected}` in:\n{code}");
}

// Legacy object-array storage

#[test]
fn generate___object_array___legacy_shape() {
    let spec = spec("Item", &["int id", "GameObject prefab"])
        .with_options(GenerationOptions::default().with_storage(StorageMode::ObjectArray));

    let code = render(&spec);

    assert!(code.starts_with("using UdonSharp;\nusing UnityEngine;\n\n"));
    assert!(code.contains("// Enum for assigning index of field objects"));
    assert!(code.contains("[AddComponentMenu(\"\")]\npublic class Item : UdonSharpBehaviour\n"));
    assert!(code.contains("var buff = new object[(int)ItemField.Count];"));
    assert!(code.contains("buff[(int)ItemField.Prefab] = prefab;"));
    assert!(code.contains("return (Item)(object)buff;"));
    assert!(code.contains("=> (GameObject)((object[])(object)instance)[(int)ItemField.Prefab];"));
    assert!(code.contains("=> ((object[])(object)instance)[(int)ItemField.Id] = arg;"));
    assert!(!code.contains("DataToken"));
}

#[test]
fn generate___object_array_json___adds_data_import() {
    let spec = spec("Item", &["int id"]).with_options(
        GenerationOptions::default()
            .with_storage(StorageMode::ObjectArray)
            .with_json_deserialize(true),
    );

    let code = render(&spec);

    assert!(code.starts_with("using UdonSharp;\nusing UnityEngine;\nusing VRC.SDK3.Data;\n\n"));
    assert!(code.contains("public static Item New(DataDictionary dic)"));
    assert!(code.contains("buff[(int)ItemField.Id] = id;"));
    assert!(code.contains("// Make field objects"));
    assert!(!code.contains("DataTokens"));
}

// Generator reuse

#[test]
fn ClassGenerator___generate_twice___identical_output() {
    let spec = spec("Item", &["int id", "nope"]);
    let table = StaticTypeTable::default();
    let generator = ClassGenerator::new(&spec, &table);

    assert_eq!(generator.fields().len(), 1);
    assert_eq!(generator.generate(), generator.generate());
}
