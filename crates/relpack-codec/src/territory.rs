//! Territory columns: country names in the model, ISO 3166-1 alpha-2 codes in
//! the sheet.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use relpack_core::domain::TerritoryMode;

/// Known territories as `(code, name)`, in the order the editor lists them.
pub const COUNTRIES: &[(&str, &str)] = &[
  ("US", "United States"),
  ("CA", "Canada"),
  ("MX", "Mexico"),
  ("AI", "Anguilla"),
  ("AG", "Antigua And Barbuda"),
  ("AW", "Aruba"),
  ("BS", "Bahamas"),
  ("BB", "Barbados"),
  ("BZ", "Belize"),
  ("BM", "Bermuda"),
  ("VG", "British Virgin Islands"),
  ("KY", "Cayman Islands"),
  ("CR", "Costa Rica"),
  ("CU", "Cuba"),
  ("DM", "Dominica"),
  ("DO", "Dominican Republic"),
  ("SV", "El Salvador"),
  ("GL", "Greenland"),
  ("GD", "Grenada"),
  ("GP", "Guadeloupe"),
  ("GU", "Guam"),
  ("GT", "Guatemala"),
  ("HT", "Haiti"),
  ("HN", "Honduras"),
  ("JM", "Jamaica"),
  ("MQ", "Martinique"),
  ("MS", "Montserrat"),
  ("NI", "Nicaragua"),
  ("PA", "Panama"),
  ("PR", "Puerto Rico"),
  ("KN", "Saint Kitts And Nevis"),
  ("LC", "Saint Lucia"),
  ("VC", "Saint Vincent And The Grenadines"),
  ("PM", "St. Pierre And Miquelon"),
  ("TT", "Trinidad And Tobago"),
  ("TC", "Turks And Caicos Islands"),
  ("VI", "United States Virgin Islands"),
  ("AN", "Netherlands Antilles"),
  ("BL", "Saint-Barthélemy"),
  ("MF", "Saint-Martin (French part)"),
  ("AX", "Aland Islands"),
  ("AL", "Albania"),
  ("AD", "Andorra"),
  ("AT", "Austria"),
  ("BY", "Belarus"),
  ("BE", "Belgium"),
  ("BA", "Bosnia And Herzegowina"),
  ("BG", "Bulgaria"),
  ("HR", "Croatia"),
  ("CY", "Cyprus"),
  ("CZ", "Czech Republic"),
  ("DK", "Denmark"),
  ("EE", "Estonia"),
  ("FO", "Faroe Islands"),
  ("FI", "Finland"),
  ("FR", "France"),
  ("DE", "Germany"),
  ("GI", "Gibraltar"),
  ("GR", "Greece"),
  ("GG", "Guernsey"),
  ("VA", "Holy See (Vatican City State)"),
  ("HU", "Hungary"),
  ("IS", "Iceland"),
  ("IE", "Ireland"),
  ("IM", "Isle of Man"),
  ("IT", "Italy"),
  ("JE", "Jersey"),
  ("LV", "Latvia"),
  ("LI", "Liechtenstein"),
  ("LT", "Lithuania"),
  ("LU", "Luxembourg"),
  ("MT", "Malta"),
  ("MD", "Moldova"),
  ("MC", "Monaco"),
  ("ME", "Montenegro"),
  ("NL", "Netherlands"),
  ("MK", "North Macedonia"),
  ("NO", "Norway"),
  ("PL", "Poland"),
  ("PT", "Portugal"),
  ("RO", "Romania"),
  ("SM", "San Marino"),
  ("RS", "Serbia"),
  ("SK", "Slovakia"),
  ("SI", "Slovenia"),
  ("ES", "Spain"),
  ("SJ", "Svalbard And Jan Mayen Islands"),
  ("SE", "Sweden"),
  ("CH", "Switzerland"),
  ("UA", "Ukraine"),
  ("GB", "United Kingdom"),
  ("AF", "Afghanistan"),
  ("AM", "Armenia"),
  ("AZ", "Azerbaijan"),
  ("BH", "Bahrain"),
  ("BD", "Bangladesh"),
  ("BT", "Bhutan"),
  ("BN", "Brunei Darussalam"),
  ("KH", "Cambodia"),
  ("CN", "China"),
  ("GE", "Georgia"),
  ("HK", "Hong Kong"),
  ("IN", "India"),
  ("ID", "Indonesia"),
  ("IR", "Iran"),
  ("IQ", "Iraq"),
  ("IL", "Israel"),
  ("JP", "Japan"),
  ("JO", "Jordan"),
  ("KZ", "Kazakhstan"),
  ("KR", "Korea, Republic Of"),
  ("KP", "Korea, D.P.R.O."),
  ("KW", "Kuwait"),
  ("KG", "Kyrgyzstan"),
  ("LA", "Laos"),
  ("LB", "Lebanon"),
  ("MO", "Macau"),
  ("MY", "Malaysia"),
  ("MV", "Maldives"),
  ("MN", "Mongolia"),
  ("MM", "Myanmar"),
  ("NP", "Nepal"),
  ("OM", "Oman"),
  ("PK", "Pakistan"),
  ("PS", "Palestinian Territory, Occupied"),
  ("PH", "Philippines"),
  ("QA", "Qatar"),
  ("SA", "Saudi Arabia"),
  ("SG", "Singapore"),
  ("LK", "Sri Lanka"),
  ("SY", "Syrian Arab Republic"),
  ("TW", "Taiwan"),
  ("TJ", "Tajikistan"),
  ("TH", "Thailand"),
  ("TL", "Timor-Leste"),
  ("TR", "Turkey"),
  ("TM", "Turkmenistan"),
  ("AE", "United Arab Emirates"),
  ("UZ", "Uzbekistan"),
  ("VN", "Viet Nam"),
  ("YE", "Yemen"),
  ("AR", "Argentina"),
  ("BO", "Bolivia"),
  ("BR", "Brazil"),
  ("CL", "Chile"),
  ("CO", "Colombia"),
  ("EC", "Ecuador"),
  ("GF", "French Guiana"),
  ("GY", "Guyana"),
  ("PY", "Paraguay"),
  ("PE", "Peru"),
  ("SR", "Suriname"),
  ("UY", "Uruguay"),
  ("VE", "Venezuela"),
  ("FK", "Falkland Islands"),
  ("DZ", "Algeria"),
  ("AO", "Angola"),
  ("BJ", "Benin"),
  ("BW", "Botswana"),
  ("BF", "Burkina Faso"),
  ("BI", "Burundi"),
  ("CM", "Cameroon"),
  ("CV", "Cape Verde"),
  ("CF", "Central African Republic"),
  ("TD", "Chad"),
  ("KM", "Comoros"),
  ("CI", "Cote D'ivoire"),
  ("CG", "Congo"),
  ("CD", "Congo, The DRC"),
  ("DJ", "Djibouti"),
  ("EG", "Egypt"),
  ("GQ", "Equatorial Guinea"),
  ("ER", "Eritrea"),
  ("ET", "Ethiopia"),
  ("GA", "Gabon"),
  ("GM", "Gambia"),
  ("GH", "Ghana"),
  ("GN", "Guinea"),
  ("GW", "Guinea-Bissau"),
  ("KE", "Kenya"),
  ("LS", "Lesotho"),
  ("LR", "Liberia"),
  ("LY", "Libyan Arab Jamahiriya"),
  ("MG", "Madagascar"),
  ("MW", "Malawi"),
  ("ML", "Mali"),
  ("MR", "Mauritania"),
  ("MU", "Mauritius"),
  ("YT", "Mayotte"),
  ("MA", "Morocco"),
  ("MZ", "Mozambique"),
  ("NA", "Namibia"),
  ("NE", "Niger"),
  ("NG", "Nigeria"),
  ("RE", "Reunion"),
  ("RW", "Rwanda"),
  ("ST", "Sao Tome And Principe"),
  ("SN", "Senegal"),
  ("SC", "Seychelles"),
  ("SL", "Sierra Leone"),
  ("SO", "Somalia"),
  ("ZA", "South Africa"),
  ("SS", "South Sudan"),
  ("SH", "St. Helena"),
  ("SD", "Sudan"),
  ("SZ", "Swaziland"),
  ("TZ", "Tanzania"),
  ("TG", "Togo"),
  ("TN", "Tunisia"),
  ("UG", "Uganda"),
  ("EH", "Western Sahara"),
  ("ZM", "Zambia"),
  ("ZW", "Zimbabwe"),
  ("AS", "American Samoa"),
  ("AU", "Australia"),
  ("CC", "Cocos (Keeling) Islands"),
  ("CK", "Cook Islands"),
  ("FJ", "Fiji"),
  ("PF", "French Polynesia"),
  ("HM", "Heard and McDonald Islands"),
  ("KI", "Kiribati"),
  ("MH", "Marshall Islands"),
  ("FM", "Micronesia"),
  ("NR", "Nauru"),
  ("NC", "New Caledonia"),
  ("NZ", "New Zealand"),
  ("NU", "Niue"),
  ("NF", "Norfolk Island"),
  ("MP", "Northern Mariana Islands"),
  ("PW", "Palau"),
  ("PG", "Papua New Guinea"),
  ("PN", "Pitcairn"),
  ("WS", "Samoa"),
  ("SB", "Solomon Islands"),
];

/// Names accepted on encode that are not the table's canonical spelling.
const ENCODE_ALIASES: &[(&str, &str)] = &[("South Korea", "KR")];

static NAME_TO_CODE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
  COUNTRIES.iter().map(|(code, name)| (*name, *code)).chain(ENCODE_ALIASES.iter().copied()).collect()
});

static CODE_TO_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| COUNTRIES.iter().copied().collect());

/// ISO code for a country name, if known.
pub fn country_code(name: &str) -> Option<&'static str> {
  NAME_TO_CODE.get(name).copied()
}

/// Canonical country name for an ISO code, if known.
pub fn country_name(code: &str) -> Option<&'static str> {
  CODE_TO_NAME.get(code).copied()
}

/// Values of the `Territory` and `Excluded Territory` columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerritoryColumns {
  pub included: String,
  pub excluded: String,
}

/// Territory fields of a release, as recovered from the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritorySelection {
  pub is_worldwide: bool,
  pub mode: TerritoryMode,
  pub territories: Vec<String>,
}

/// Projects the territory fields onto the two sheet columns.
///
/// At most one column is ever non-empty. Unknown names are written as-is.
pub fn encode_territories(is_worldwide: bool, mode: TerritoryMode, territories: &[String]) -> TerritoryColumns {
  if is_worldwide {
    return TerritoryColumns::default();
  }

  let codes = territories.iter().map(|name| country_code(name).unwrap_or(name.as_str())).collect::<Vec<_>>().join("/");

  match mode {
    TerritoryMode::Include => TerritoryColumns { included: codes, excluded: String::new() },
    TerritoryMode::Exclude => TerritoryColumns { included: String::new(), excluded: codes },
  }
}

/// Inverse of [`encode_territories`].
///
/// Both columns empty means worldwide. A non-empty `included` column wins
/// over `excluded`.
pub fn decode_territories(included: &str, excluded: &str) -> TerritorySelection {
  let included = split_codes(included);
  let excluded = split_codes(excluded);

  let is_worldwide = included.is_empty() && excluded.is_empty();
  let (mode, territories) =
    if !included.is_empty() { (TerritoryMode::Include, included) } else { (TerritoryMode::Exclude, excluded) };

  TerritorySelection { is_worldwide, mode, territories }
}

fn split_codes(column: &str) -> Vec<String> {
  column
    .split('/')
    .map(str::trim)
    .filter(|code| !code.is_empty())
    .map(|code| country_name(code).unwrap_or(code).to_string())
    .collect()
}
