//! Declaration-module rendering.
//!
//! Assembles the final `.d.ts` body: the shared warning/file interfaces
//! wrapping the normalized source, the `Prettify` utility type, and the two
//! client-type maps serialized as type-literal objects.

use crate::builder::Node;

/// `${…}` markers are substituted at render time.
const TEMPLATE: &str = r"
declare namespace MoodleClientFunctionTypes {

  /** Structure of warnings returned by WS. */
  interface CoreWSExternalWarning {
    /** Item. */
    item?: string

    /** Item id. */
    itemid?: number

    /** The warning code can be used by the client app to implement specific behaviour. */
    warningcode: string

    /** Untranslated english message to explain the warning. */
    message: string
  }

  /** Structure of files returned by WS. */
  interface CoreWSExternalFile {
    /** Downloadable file url. */
    fileurl: string
    /** File name. */
    filename?: string
    /** File path. */
    filepath?: string
    /** File size. */
    filesize?: number
    /** Time modified. */
    timemodified?: number
    /** File mime type. */
    mimetype?: string
    /** Whether is an external file. */
    isexternalfile?: number
    /** The repository type for external files. */
    repositorytype?: string
  }

  ${body}
}

type Prettify<T> = T extends object
  ? {
      [K in keyof T]: T[K] extends Record<string, unknown>
        ? Prettify<T[K]>
        : T[K]
    } & {}
  : T extends (infer E)[]
    ? Prettify<E>[]
    : T

type MoodleClientTypes = ${tree}

type MoodleClientFlattenedTypes = ${flat}

export { MoodleClientFunctionTypes, type MoodleClientTypes, type MoodleClientFlattenedTypes };
";

/// Render the complete declaration module.
pub fn render(body: &str, tree: &Node, flat: &[(String, String)]) -> String {
    let flat_tree = Node::Branch(
        flat.iter()
            .map(|(key, sig)| (key.clone(), Node::Leaf(sig.clone())))
            .collect(),
    );
    TEMPLATE
        .replace("${body}", body)
        .replace("${tree}", &type_literal(tree))
        .replace("${flat}", &type_literal(&flat_tree))
}

/// Serialize a node as a type-literal object: two-space indent, keys emitted
/// verbatim (flat-map keys carry their own quotes).
pub fn type_literal(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Leaf(sig) => out.push_str(sig),
        Node::Branch(entries) if entries.is_empty() => out.push_str("{}"),
        Node::Branch(entries) => {
            out.push_str("{\n");
            for (i, (key, child)) in entries.iter().enumerate() {
                for _ in 0..=depth {
                    out.push_str("  ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_node(out, child, depth + 1);
                if i + 1 < entries.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push('}');
        }
    }
}
