//! Cloud region identifiers recognized by the `Region` value type.

use std::fmt;

macro_rules! regions {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        /// A recognized cloud region.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum Region {
            $($variant,)+
        }

        impl Region {
            /// Every recognized region, in declaration order.
            pub const ALL: &'static [Region] = &[$(Region::$variant,)+];

            /// Region identifier as written in configuration, e.g. `us-east-1`.
            pub fn id(self) -> &'static str {
                match self {
                    $(Region::$variant => $id,)+
                }
            }

            /// Symbolic name used for display, e.g. `US_EAST_1`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Region::$variant => stringify!($variant),)+
                }
            }

            /// Look up a region by its identifier. Matching is exact.
            pub fn from_id(id: &str) -> Option<Region> {
                match id {
                    $($id => Some(Region::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

regions! {
    GovCloud => "us-gov-west-1",
    US_GOV_EAST_1 => "us-gov-east-1",
    US_EAST_1 => "us-east-1",
    US_EAST_2 => "us-east-2",
    US_WEST_1 => "us-west-1",
    US_WEST_2 => "us-west-2",
    EU_WEST_1 => "eu-west-1",
    EU_WEST_2 => "eu-west-2",
    EU_WEST_3 => "eu-west-3",
    EU_CENTRAL_1 => "eu-central-1",
    EU_NORTH_1 => "eu-north-1",
    AP_EAST_1 => "ap-east-1",
    AP_SOUTH_1 => "ap-south-1",
    AP_SOUTHEAST_1 => "ap-southeast-1",
    AP_SOUTHEAST_2 => "ap-southeast-2",
    AP_NORTHEAST_1 => "ap-northeast-1",
    AP_NORTHEAST_2 => "ap-northeast-2",
    AP_NORTHEAST_3 => "ap-northeast-3",
    SA_EAST_1 => "sa-east-1",
    CN_NORTH_1 => "cn-north-1",
    CN_NORTHWEST_1 => "cn-northwest-1",
    CA_CENTRAL_1 => "ca-central-1",
    ME_SOUTH_1 => "me-south-1",
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
