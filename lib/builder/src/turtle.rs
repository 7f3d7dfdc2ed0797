use crate::{BuildContext, BuildError};
use oxttl::TurtleSerializer;
use sensor_graph_model::vocab::PREFIXES;
use sensor_graph_model::Triple;
use std::io::Write;

fn serializer() -> Result<TurtleSerializer, BuildError> {
    let mut serializer = TurtleSerializer::new();
    for (name, iri) in PREFIXES {
        serializer = serializer.with_prefix(*name, *iri)?;
    }
    Ok(serializer)
}

/// Serializes `triples` as Turtle, in the given order.
///
/// Consecutive triples sharing a subject are grouped, so the same sequence always gives the same
/// bytes.
pub fn write_turtle<W: Write>(triples: &[Triple], writer: W) -> Result<W, BuildError> {
    let mut serializer = serializer()?.for_writer(writer);
    for triple in triples {
        serializer.serialize_triple(triple)?;
    }
    Ok(serializer.finish()?)
}

/// Writes the document produced when there is no readings table: a comment, the prefixes and,
/// if `declare_schema` is set, the schema declarations. It never holds any instance.
pub fn write_placeholder<W: Write>(
    mut writer: W,
    declare_schema: bool,
) -> Result<W, BuildError> {
    writeln!(writer, "# No readings table was found, the graph holds no measurement.")?;
    if declare_schema {
        let mut context = BuildContext::new();
        context.declare_schema();
        return write_turtle(context.triples(), writer);
    }
    // The serializer only writes its prefixes along with the first triple.
    for (name, iri) in PREFIXES {
        writeln!(writer, "@prefix {name}: <{iri}> .")?;
    }
    Ok(writer)
}
