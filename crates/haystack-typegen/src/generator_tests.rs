use haystack_defs::{Def, DefNamespace};

use crate::test_utils::{config, sample_defs};
use crate::{Error, Generator, TypeGuardPolicy, generate};

fn keys(taxonomy: &DefNamespace, seeds: &[&str], policy: TypeGuardPolicy) -> Vec<String> {
    let document = Generator::new(taxonomy, config().type_guards(policy))
        .build(seeds)
        .unwrap();
    document.declarations().map(|d| d.key()).collect()
}

#[test]
fn single_bool_member() {
    let ns = DefNamespace::from_defs([
        Def::new("bool"),
        Def::new("foo"),
        Def::new("test").is(["bool"]).tag_on(["foo"]),
    ]);

    let text = generate(&ns, &["foo"], config()).unwrap();

    insta::assert_snapshot!(text, @r#"
/*
 * Automatically generated by haystack-codegen on Mon Oct 19 2026.
 */

/* eslint @typescript-eslint/no-namespace: "off" */

import {
	HDict,
	HBool,
} from 'haystack-core'

/**
 * Libraries used for code generation.
 */
export const LIBS = []

/**
 * foo
 */
export interface Foo extends HDict {
	test?: HBool
}
"#);
}

#[test]
fn site_with_inheritance() {
    let text = generate(&sample_defs(), &["site"], config()).unwrap();

    insta::assert_snapshot!(text, @r#"
/*
 * Automatically generated by haystack-codegen on Mon Oct 19 2026.
 */

/* eslint @typescript-eslint/no-namespace: "off" */

import {
	HDict,
	HRef,
	HStr,
	HMarker,
	HNum,
	HNamespace,
	Kind,
	valueIsKind,
} from 'haystack-core'

/**
 * Libraries used for code generation.
 */
export const LIBS = [
	{
		name: 'lib:phIoT',
		version: '3.9.10',
	},
	{
		name: 'lib:ph',
		version: '3.9.10',
	},
]

/**
 * marker
 */
export type Marker = HDict

/**
 * entity
 *
 * Top level entity.
 */
export interface Entity extends Marker {
	id?: HRef
	/**
	 * Display text.
	 */
	dis?: HStr
}

/**
 * site
 *
 * A site.
 */
export interface Site extends Entity {
	/**
	 * A site.
	 */
	site: HMarker

	area?: HNum
}

/**
 * Returns true if the value is a site.
 *
 * @param value The value to test.
 * @param namespace Optional defs namespace used for a structural check.
 * @returns true if the value matches.
 */
export function isSite(value: unknown, namespace?: HNamespace): value is Site {
	if (!valueIsKind<HDict>(value, Kind.Dict)) {
		return false
	}

	if (namespace) {
		return namespace.fits(value, 'site')
	}

	return value.has('site')
}
"#);
}

#[test]
fn feature_is_wrapped_in_namespace() {
    let text = generate(&sample_defs(), &["filetype:json"], config()).unwrap();

    insta::assert_snapshot!(text, @r#"
/*
 * Automatically generated by haystack-codegen on Mon Oct 19 2026.
 */

/* eslint @typescript-eslint/no-namespace: "off" */

import {
	HDict,
	HStr,
} from 'haystack-core'

/**
 * Libraries used for code generation.
 */
export const LIBS = [
	{
		name: 'lib:ph',
		version: '3.9.10',
	},
]

/**
 * dict
 */
export type Dict = HDict

/**
 * filetype
 *
 * File format.
 */
export interface Filetype extends Dict {
	mimeType?: HStr
}

/**
 * filetype
 *
 * File format.
 */
export namespace filetype {
	/**
	 * filetype:json
	 */
	export type Json = Filetype
}
"#);
}

#[test]
fn shared_ancestors_are_emitted_once() {
    let keys = keys(
        &sample_defs(),
        &["ahu", "meter", "site"],
        TypeGuardPolicy::Entity,
    );

    assert_eq!(
        keys,
        vec![
            "Marker", "Entity", "Equip", "tg-Equip", "Ahu", "tg-Ahu", "Meter", "tg-Meter", "Site",
            "tg-Site",
        ]
    );
}

#[test]
fn memberless_def_aliases_its_supertype() {
    let text = generate(&sample_defs(), &["meter"], config()).unwrap();

    let meter = "/**\n * meter\n */\nexport type Meter = Equip\n";
    let equip = "export interface Equip extends Entity {\n\
                 \tequip: HMarker\n\
                 \tsiteRef?: HRef\n\
                 }\n";

    assert!(text.contains(meter));
    assert!(text.contains(equip));
}

#[test]
fn seed_order_does_not_matter() {
    let ns = sample_defs();

    let forward = generate(&ns, &["ahu", "filetype:json", "site"], config()).unwrap();
    let backward = generate(&ns, &["site", "site", "filetype:json", "ahu"], config()).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn plain_names_claim_identifiers_before_features() {
    let ns = DefNamespace::from_defs([
        Def::new("marker"),
        Def::new("func").is(["marker"]),
        Def::new("func:func").is(["func"]),
    ]);

    let keys = keys(&ns, &["func:func", "func"], TypeGuardPolicy::Entity);
    assert_eq!(keys, vec!["Marker", "Func", "func:Func_"]);

    let text = generate(&ns, &["func:func", "func"], config()).unwrap();
    let namespace = "export namespace func {\n\
                     \t/**\n\
                     \t * func:func\n\
                     \t */\n\
                     \texport type Func_ = Func\n\
                     }\n";
    assert!(text.contains(namespace));
}

#[test]
fn reserved_feature_prefix_gets_suffix() {
    let ns = DefNamespace::from_defs([
        Def::new("valueIsKind").doc("Kind check."),
        Def::new("valueIsKind:dict").is(["valueIsKind"]),
    ]);

    let keys = keys(&ns, &["valueIsKind:dict"], TypeGuardPolicy::All);
    assert_eq!(
        keys,
        vec!["ValueIsKind", "tg-ValueIsKind", "valueIsKind_:Dict"]
    );

    let text = generate(&ns, &["valueIsKind:dict"], config()).unwrap();
    let namespace = "/**\n * valueIsKind_\n *\n * Kind check.\n */\n\
                     export namespace valueIsKind_ {\n";
    assert!(text.contains(namespace));
}

#[test]
fn unknown_seed_fails_before_output() {
    let result = generate(&sample_defs(), &["site", "space"], config());

    assert_eq!(result, Err(Error::UnknownDef("space".to_string())));
}

#[test]
fn inheritance_cycle_is_reported() {
    let ns = DefNamespace::from_defs([Def::new("a").is(["b"]), Def::new("b").is(["a"])]);

    let result = generate(&ns, &["a"], config());

    assert_eq!(result, Err(Error::InheritanceCycle("a".to_string())));
}

#[test]
fn type_guard_policy() {
    let ns = DefNamespace::from_defs([
        Def::new("marker"),
        Def::new("entity").is(["marker"]),
        Def::new("site").is(["entity"]),
        Def::new("thing").is(["marker"]),
    ]);
    let guards = |policy| -> Vec<String> {
        keys(&ns, &["site", "thing"], policy)
            .into_iter()
            .filter(|key| key.starts_with("tg-"))
            .collect()
    };

    assert_eq!(
        guards(TypeGuardPolicy::Entity),
        vec!["tg-Entity", "tg-Site"]
    );
    assert_eq!(
        guards(TypeGuardPolicy::All),
        vec!["tg-Marker", "tg-Entity", "tg-Site", "tg-Thing"]
    );
}

#[test]
fn core_library_defs_get_no_guard() {
    let keys = keys(&sample_defs(), &["site"], TypeGuardPolicy::All);

    assert_eq!(keys, vec!["Marker", "Entity", "Site", "tg-Site"]);
}

#[test]
fn conjuncts_get_no_guard() {
    let keys = keys(&sample_defs(), &["elec-meter"], TypeGuardPolicy::Entity);

    assert_eq!(
        keys,
        vec![
            "Marker",
            "Elec",
            "Entity",
            "Equip",
            "tg-Equip",
            "Meter",
            "tg-Meter",
            "Elec_Meter",
        ]
    );

    let text = generate(&sample_defs(), &["elec-meter"], config()).unwrap();
    let alias = "/**\n * elec-meter\n */\nexport type Elec_Meter = Elec & Meter\n";
    assert!(text.contains(alias));
}

#[test]
fn guard_falls_back_to_subtype_tags() {
    let text = generate(&sample_defs(), &["equip"], config()).unwrap();

    let check = "\treturn ['equip', 'meter', 'ahu'].some((name) => value.has(name))\n";
    assert!(text.contains(check));
}

#[test]
fn list_member_has_generic() {
    let text = generate(&sample_defs(), &["point"], config()).unwrap();

    let point = "export interface Point extends Entity {\n\
                 \tpoint: HMarker\n\
                 \tmarkers?: HList<HSymbol>\n\
                 }\n";

    assert!(text.contains(point));
    assert!(text.contains("\tHList,\n\tHSymbol,\n"));
}

#[test]
fn dict_members_resolve_to_identifiers() {
    let ns = DefNamespace::from_defs([
        Def::new("dict"),
        Def::new("list"),
        Def::new("point"),
        Def::new("hisConfig").is(["dict"]).tag_on(["point"]),
        Def::new("configs")
            .is(["list"])
            .of("hisConfig")
            .tag_on(["point"]),
        Def::new("meta")
            .is(["dict"])
            .of("hisConfig")
            .tag_on(["point"]),
    ]);

    let text = generate(&ns, &["point"], config()).unwrap();

    let point = "export interface Point extends HDict {\n\
                 \thisConfig?: HisConfig\n\
                 \tconfigs?: HList<HisConfig>\n\
                 \tmeta?: Meta\n\
                 }\n";
    let import = "import {\n\tHDict,\n\tHList,\n} from 'haystack-core'\n";

    assert!(text.contains(point));
    assert!(text.contains(import));
}

#[test]
fn unusable_tags_are_skipped() {
    let ns = DefNamespace::from_defs([
        Def::new("str"),
        Def::new("list"),
        Def::new("point"),
        Def::new("keys").is(["list"]).tag_on(["point"]),
        Def::new("unit").tag_on(["point"]),
        Def::new("dis").is(["str"]).tag_on(["point"]),
    ]);

    let text = generate(&ns, &["point"], config()).unwrap();

    let point = "export interface Point extends HDict {\n\tdis?: HStr\n}\n";
    assert!(text.contains(point));
    assert!(!text.contains("keys"));
    assert!(!text.contains("unit"));
}

#[test]
fn tags_inherited_from_supertypes_stay_on_the_supertype() {
    let keys = keys(&sample_defs(), &["ahu"], TypeGuardPolicy::Entity);
    let text = generate(&sample_defs(), &["ahu"], config()).unwrap();

    assert!(keys.contains(&"Equip".to_string()));
    let ahu = "export interface Ahu extends Equip {\n\tahu: HMarker\n}\n";
    assert!(text.contains(ahu));
}

#[test]
fn no_seeds_yield_preamble_only() {
    let seeds: [&str; 0] = [];

    let text = generate(&sample_defs(), &seeds, config()).unwrap();

    assert!(text.ends_with("export const LIBS = []\n"));
    assert!(!text.contains("import"));
}
