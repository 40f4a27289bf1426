use haystack_defs::Kind;
use haystack_typegen::kinds::ctor_name;

pub fn run() {
    print!("{}", table());
}

fn table() -> String {
    let mut out = format!("Value kinds ({}):\n", Kind::ALL.len());
    for kind in Kind::ALL {
        let name = kind.def_name();
        let ty = ctor_name(kind);
        out.push_str(&format!("  {name:<10} {ty}\n"));
    }
    out
}
