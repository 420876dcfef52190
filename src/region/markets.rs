//! Spotify markets grouped by sub-region, as (ISO 3166-1 alpha-2, country name).

pub const AFRICA: &[(&str, &str)] = &[
    ("DZ", "Algeria"),
    ("AO", "Angola"),
    ("BJ", "Benin"),
    ("BW", "Botswana"),
    ("BF", "Burkina Faso"),
    ("BI", "Burundi"),
    ("CM", "Cameroon"),
    ("CV", "Cape Verde"),
    ("TD", "Chad"),
    ("KM", "Comoros"),
    ("CG", "Republic of the Congo"),
    ("CD", "Democratic Republic of the Congo"),
    ("CI", "Côte d'Ivoire"),
    ("DJ", "Djibouti"),
    ("EG", "Egypt"),
    ("GQ", "Equatorial Guinea"),
    ("ET", "Ethiopia"),
    ("GA", "Gabon"),
    ("GM", "Gambia"),
    ("GH", "Ghana"),
    ("GN", "Guinea"),
    ("GW", "Guinea-Bissau"),
    ("KE", "Kenya"),
    ("LS", "Lesotho"),
    ("LR", "Liberia"),
    ("LY", "Libya"),
    ("MG", "Madagascar"),
    ("MW", "Malawi"),
    ("ML", "Mali"),
    ("MR", "Mauritania"),
    ("MU", "Mauritius"),
    ("MA", "Morocco"),
    ("MZ", "Mozambique"),
    ("NA", "Namibia"),
    ("NE", "Niger"),
    ("NG", "Nigeria"),
    ("RW", "Rwanda"),
    ("ST", "Sao Tome and Principe"),
    ("SN", "Senegal"),
    ("SC", "Seychelles"),
    ("SL", "Sierra Leone"),
    ("ZA", "South Africa"),
    ("SZ", "Swaziland"),
    ("TZ", "Tanzania"),
    ("TG", "Togo"),
    ("TN", "Tunisia"),
    ("UG", "Uganda"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];

pub const ASIA: &[(&str, &str)] = &[
    ("AM", "Armenia"),
    ("AZ", "Azerbaijan"),
    ("BH", "Bahrain"),
    ("BD", "Bangladesh"),
    ("BT", "Bhutan"),
    ("BN", "Brunei Darussalam"),
    ("KH", "Cambodia"),
    ("GE", "Georgia"),
    ("HK", "Hong Kong"),
    ("IN", "India"),
    ("ID", "Indonesia"),
    ("IQ", "Iraq"),
    ("IL", "Israel"),
    ("JP", "Japan"),
    ("JO", "Jordan"),
    ("KR", "Korea"),
    ("KW", "Kuwait"),
    ("KG", "Kyrgyzstan"),
    ("LA", "Lao People's Democratic Republic"),
    ("LB", "Lebanon"),
    ("MO", "Macao"),
    ("MY", "Malaysia"),
    ("MV", "Maldives"),
    ("MN", "Mongolia"),
    ("NP", "Nepal"),
    ("OM", "Oman"),
    ("PK", "Pakistan"),
    ("PS", "Palestine, State of"),
    ("PH", "Philippines"),
    ("QA", "Qatar"),
    ("SA", "Saudi Arabia"),
    ("SG", "Singapore"),
    ("LK", "Sri Lanka"),
    ("TW", "Taiwan"),
    ("TJ", "Tajikistan"),
    ("TH", "Thailand"),
    ("TL", "Timor-Leste"),
    ("AE", "United Arab Emirates"),
    ("UZ", "Uzbekistan"),
    ("VN", "Viet Nam"),
];

pub const EUROPE: &[(&str, &str)] = &[
    ("AL", "Albania"),
    ("AD", "Andorra"),
    ("AT", "Austria"),
    ("BY", "Belarus"),
    ("BE", "Belgium"),
    ("BA", "Bosnia"),
    ("BG", "Bulgaria"),
    ("HR", "Croatia"),
    ("CY", "Cyprus"),
    ("CZ", "Czech Republic"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("GR", "Greece"),
    ("HU", "Hungary"),
    ("IS", "Iceland"),
    ("IE", "Ireland"),
    ("IT", "Italy"),
    ("KZ", "Kazakhstan"),
    ("XK", "Kosovo"),
    ("LV", "Latvia"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("MK", "North Macedonia"),
    ("MT", "Malta"),
    ("MD", "Moldova"),
    ("MC", "Monaco"),
    ("ME", "Montenegro"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SM", "San Marino"),
    ("RS", "Serbia"),
    ("SK", "Slovakia"),
    ("SI", "Slovenia"),
    ("ES", "Spain"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("TR", "Turkey"),
    ("UA", "Ukraine"),
    ("GB", "United Kingdom"),
];

pub const NORTH_AMERICA: &[(&str, &str)] = &[
    ("AG", "Antigua and Barbuda"),
    ("BS", "Bahamas"),
    ("BB", "Barbados"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CR", "Costa Rica"),
    ("CW", "Curaçao"),
    ("DM", "Dominica"),
    ("DO", "Dominican Republic"),
    ("SV", "El Salvador"),
    ("GD", "Grenada"),
    ("GT", "Guatemala"),
    ("HT", "Haiti"),
    ("HN", "Honduras"),
    ("JM", "Jamaica"),
    ("MX", "Mexico"),
    ("NI", "Nicaragua"),
    ("PA", "Panama"),
    ("KN", "Saint Kitts and Nevis"),
    ("LC", "Saint Lucia"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("TT", "Trinidad and Tobago"),
    ("US", "United States"),
];

pub const SOUTH_AMERICA: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("BO", "Bolivia"),
    ("BR", "Brazil"),
    ("CL", "Chile"),
    ("CO", "Colombia"),
    ("EC", "Ecuador"),
    ("GY", "Guyana"),
    ("PY", "Paraguay"),
    ("PE", "Peru"),
    ("SR", "Suriname"),
    ("UY", "Uruguay"),
    ("VE", "Venezuela"),
];

pub const OCEANIA: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("FJ", "Fiji"),
    ("KI", "Kiribati"),
    ("MH", "Marshall Islands"),
    ("FM", "Micronesia"),
    ("NR", "Nauru"),
    ("NZ", "New Zealand"),
    ("PW", "Palau"),
    ("PG", "Papua New Guinea"),
    ("WS", "Samoa"),
    ("SB", "Solomon Islands"),
    ("TO", "Tonga"),
    ("TV", "Tuvalu"),
    ("VU", "Vanuatu"),
];
