//! VPC template builders.
//!
//! Two shapes, matching how the orchestrator feeds CIDRs in: a single CIDR
//! string, or a comma-separated list that fans out into one VPC (plus a
//! matching output) per entry. The CIDR value is usually still a placeholder
//! token at build time; it is carried through as an opaque string.

use crate::Result;
use crate::template::{Output, Ref, Resource, Tag, Template};
use log::debug;

pub const VPC_TYPE: &str = "AWS::EC2::VPC";

/// Token the orchestrator substitutes with the stack's configured CIDR(s).
pub const CIDR_PLACEHOLDER: &str = "{{ .stack.cidr }}";

/// Default value of the `Name` tag on generated VPCs.
pub const DEFAULT_TAG_NAME: &str = "qaz-tropos-test";

/// Build a template with one `VPC` resource and one `vpcid` output
/// referencing it.
pub fn single(cidr: &str, tag_name: &str) -> Result<Template> {
    let mut t = Template::new();
    t.add_resource("VPC", vpc_resource(cidr, tag_name))?;
    t.add_output("vpcid", Output::new("Vpc ID", Ref::new("VPC")))?;
    Ok(t)
}

/// Build a template with one VPC per comma-separated CIDR entry.
///
/// Entries are trimmed and empty ones dropped; entry i (in input order) yields
/// resource `VPC<i>` and output `vpcid<i>` referencing it.
pub fn multi(cidrs: &str, tag_name: &str) -> Result<Template> {
    let mut t = Template::new();
    let mut count = 0;
    for (i, cidr) in split_cidrs(cidrs).enumerate() {
        let id = format!("VPC{}", i);
        t.add_resource(id.as_str(), vpc_resource(cidr, tag_name))?;
        t.add_output(
            format!("vpcid{}", i),
            Output::new(format!("Vpc ID {}", i), Ref::new(id)),
        )?;
        count += 1;
    }
    debug!("declared {} vpc/output pair(s) from {:?}", count, cidrs);
    Ok(t)
}

fn vpc_resource(cidr: &str, tag_name: &str) -> Resource {
    Resource::new(VPC_TYPE)
        .property("CidrBlock", cidr)
        .property("Tags", vec![Tag::new("Name", tag_name)])
}

/// Split a comma-separated CIDR list, trimming whitespace and dropping empty
/// entries.
fn split_cidrs(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn single_declares_one_vpc_and_one_output() {
        let t = single("10.0.0.0/16", DEFAULT_TAG_NAME).unwrap();
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({
                "Resources": {
                    "VPC": {
                        "Type": "AWS::EC2::VPC",
                        "Properties": {
                            "CidrBlock": "10.0.0.0/16",
                            "Tags": [{"Key": "Name", "Value": "qaz-tropos-test"}],
                        },
                    },
                },
                "Outputs": {
                    "vpcid": {
                        "Description": "Vpc ID",
                        "Value": {"Ref": "VPC"},
                    },
                },
            })
        );
    }

    #[test]
    fn single_passes_placeholder_through_verbatim() {
        let t = single(CIDR_PLACEHOLDER, DEFAULT_TAG_NAME).unwrap();
        let (_, vpc) = t.resources().next().unwrap();
        assert_eq!(vpc.get("CidrBlock"), Some(&Value::from(CIDR_PLACEHOLDER)));
    }

    #[test]
    fn multi_fans_out_one_pair_per_entry_in_order() {
        let t = multi("10.0.0.0/16, 10.1.0.0/16", "test").unwrap();

        let ids: Vec<&String> = t.resources().map(|(id, _)| id).collect();
        assert_eq!(ids, ["VPC0", "VPC1"]);

        let cidrs: Vec<&Value> = t
            .resources()
            .map(|(_, r)| r.get("CidrBlock").unwrap())
            .collect();
        assert_eq!(
            cidrs,
            [&Value::from("10.0.0.0/16"), &Value::from("10.1.0.0/16")]
        );

        let outputs: Vec<(&String, &Value)> = t.outputs().map(|(n, o)| (n, &o.value)).collect();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].0, "vpcid0");
        assert_eq!(outputs[0].1, &Value::Ref(Ref::new("VPC0")));
        assert_eq!(outputs[1].0, "vpcid1");
        assert_eq!(outputs[1].1, &Value::Ref(Ref::new("VPC1")));
    }

    #[test]
    fn multi_with_single_entry_yields_suffix_zero() {
        let t = multi("10.0.0.0/16", "test").unwrap();
        assert_eq!(t.resources().count(), 1);
        let (id, _) = t.resources().next().unwrap();
        assert_eq!(id, "VPC0");
        let (name, _) = t.outputs().next().unwrap();
        assert_eq!(name, "vpcid0");
    }

    #[test]
    fn multi_trims_and_drops_empty_entries() {
        let t = multi("  10.0.0.0/16 ,, 10.1.0.0/16 , ", "test").unwrap();
        let cidrs: Vec<&Value> = t
            .resources()
            .map(|(_, r)| r.get("CidrBlock").unwrap())
            .collect();
        assert_eq!(
            cidrs,
            [&Value::from("10.0.0.0/16"), &Value::from("10.1.0.0/16")]
        );
    }

    #[test]
    fn builds_are_idempotent() {
        let a = multi("10.0.0.0/16, 10.1.0.0/16", "test").unwrap();
        let b = multi("10.0.0.0/16, 10.1.0.0/16", "test").unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}
