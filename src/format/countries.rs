//! Built-in postal code formats per country.
//!
//! Keys are ISO 3166-1 alpha-2 codes in uppercase. Rows keep their
//! historical order (roughly alphabetical by English name) and each
//! row's format list is ordered by preference: capture returns the first
//! format that occurs in the text, so earlier formats win.
//!
//! An empty format list means the country is known but has no postal code
//! shape to enforce.

/// One row of the built-in format table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryFormats {
    pub code: &'static str,
    pub name: &'static str,
    pub formats: &'static [&'static str],
}

impl CountryFormats {
    const fn new(code: &'static str, name: &'static str, formats: &'static [&'static str]) -> Self {
        Self {
            code,
            name,
            formats,
        }
    }
}

/// Postal code formats for every covered country.
pub static COUNTRY_FORMATS: &[CountryFormats] = &[
    CountryFormats::new("AF", "Afghanistan", &["####"]),
    CountryFormats::new("AL", "Albania", &["####"]),
    CountryFormats::new("DZ", "Algeria", &["#####"]),
    CountryFormats::new("AS", "American Samoa", &["#####", "#####-####"]),
    CountryFormats::new("AD", "Andorra", &["#####", "@D###", "AD#00"]),
    CountryFormats::new("AO", "Angola", &[]),
    CountryFormats::new("AI", "Anguilla", &[]),
    CountryFormats::new("AQ", "Antarctica", &[]),
    CountryFormats::new("AG", "Antigua and Barbuda", &[]),
    CountryFormats::new("AR", "Argentina", &["####", "@####@@@"]),
    CountryFormats::new("AM", "Armenia", &["####"]),
    CountryFormats::new("AW", "Aruba", &[]),
    CountryFormats::new("AU", "Australia", &["####", "###"]),
    CountryFormats::new("AT", "Austria", &["####"]),
    CountryFormats::new("AZ", "Azerbaijan", &["######", "####", "AZ####"]),
    CountryFormats::new("AX", "Åland Islands", &[]),
    CountryFormats::new("BS", "Bahamas", &[]),
    CountryFormats::new("BH", "Bahrain", &["###", "####"]),
    CountryFormats::new("BD", "Bangladesh", &["####"]),
    CountryFormats::new("BB", "Barbados", &["BB#####"]),
    CountryFormats::new("BY", "Belarus", &["######"]),
    CountryFormats::new("BE", "Belgium", &["####"]),
    CountryFormats::new("BZ", "Belize", &[]),
    CountryFormats::new("BJ", "Benin", &[]),
    CountryFormats::new("BM", "Bermuda", &["@@ ##"]),
    CountryFormats::new("BT", "Bhutan", &[]),
    CountryFormats::new("BO", "Bolivia", &[]),
    CountryFormats::new("BA", "Bosnia and Herzegowina", &["#####"]),
    CountryFormats::new("BW", "Botswana", &[]),
    CountryFormats::new("BV", "Bouvet Island", &[]),
    CountryFormats::new("BR", "Brazil", &["#####-###", "#####"]),
    CountryFormats::new("IO", "British Indian Ocean Territory", &[]),
    CountryFormats::new("BN", "Brunei Darussalam", &["@@####"]),
    CountryFormats::new("BG", "Bulgaria", &["####"]),
    CountryFormats::new("BF", "Burkina Faso", &[]),
    CountryFormats::new("BI", "Burundi", &[]),
    CountryFormats::new("KH", "Cambodia", &["#####"]),
    CountryFormats::new("CM", "Cameroon", &[]),
    CountryFormats::new("CA", "Canada", &["@#@ #@#", "@#@ #@"]),
    CountryFormats::new("CV", "Cape Verde", &["####"]),
    CountryFormats::new("KY", "Cayman Islands", &["KY#-####"]),
    CountryFormats::new("CF", "Central African Republic", &[]),
    CountryFormats::new("TD", "Chad", &[]),
    CountryFormats::new("CL", "Chile", &["#######"]),
    CountryFormats::new("CN", "China", &["######"]),
    CountryFormats::new("CX", "Christmas Island", &[]),
    CountryFormats::new("CC", "Cocos (Keeling) Islands", &[]),
    CountryFormats::new("CO", "Colombia", &["######"]),
    CountryFormats::new("KM", "Comoros", &[]),
    CountryFormats::new("CD", "Congo, Democratic Republic of (was Zaire)", &[]),
    CountryFormats::new("CG", "Congo, People's Republic of", &[]),
    CountryFormats::new("CK", "Cook Islands", &[]),
    CountryFormats::new("CR", "Costa Rica", &["#####"]),
    CountryFormats::new("CI", "Cote d'Ivoire", &[]),
    CountryFormats::new("HR", "Croatia", &["#####"]),
    CountryFormats::new("CU", "Cuba", &["#####"]),
    CountryFormats::new("CY", "Cyprus", &["####", "CY####"]),
    CountryFormats::new("CZ", "Czech Republic", &["### ##", "#####"]),
    CountryFormats::new("DK", "Denmark", &["####", "###"]),
    CountryFormats::new("DJ", "Djibouti", &[]),
    CountryFormats::new("DM", "Dominica", &[]),
    CountryFormats::new("DO", "Dominican Republic", &["#####"]),
    CountryFormats::new("TL", "East Timor", &[]),
    CountryFormats::new("EC", "Ecuador", &["######", "EC######"]),
    CountryFormats::new("EG", "Egypt", &["#####"]),
    CountryFormats::new("SV", "El Salvador", &["####"]),
    CountryFormats::new("GQ", "Equatorial Guinea", &[]),
    CountryFormats::new("ER", "Eritrea", &[]),
    CountryFormats::new("EE", "Estonia", &["#####"]),
    CountryFormats::new("ET", "Ethiopia", &["####"]),
    CountryFormats::new("FK", "Falkland Islands (Malvinas)", &["FIQQ 1ZZ", "FIQQ1ZZ"]),
    CountryFormats::new("FO", "Faroe Islands", &["###"]),
    CountryFormats::new("FJ", "Fiji", &[]),
    CountryFormats::new("FI", "Finland", &["#####"]),
    CountryFormats::new("FR", "France", &["#####"]),
    CountryFormats::new("FX", "France, metropolitan", &[]),
    CountryFormats::new("GF", "French Guiana", &["#####"]),
    CountryFormats::new("PF", "French Polynesia", &["#####"]),
    CountryFormats::new("TF", "French Southern Territories", &[]),
    CountryFormats::new("GA", "Gabon", &[]),
    CountryFormats::new("GM", "Gambia", &[]),
    CountryFormats::new("GE", "Georgia", &["####"]),
    CountryFormats::new("DE", "Germany", &["#####"]),
    CountryFormats::new("GH", "Ghana", &[]),
    CountryFormats::new("GI", "Gibraltar", &[]),
    CountryFormats::new("GR", "Greece", &["#####", "### ##"]),
    CountryFormats::new("GL", "Greenland", &["####", "###"]),
    CountryFormats::new("GD", "Grenada", &[]),
    CountryFormats::new("GP", "Guadeloupe", &["#####"]),
    CountryFormats::new("GU", "Guam", &["#####"]),
    CountryFormats::new("GT", "Guatemala", &["#####"]),
    CountryFormats::new("GG", "Guernsey", &[]),
    CountryFormats::new("GN", "Guinea", &[]),
    CountryFormats::new("GW", "Guinea-Bissau", &["####"]),
    CountryFormats::new("GY", "Guyana", &[]),
    CountryFormats::new("HT", "Haiti", &["####"]),
    CountryFormats::new("HM", "Heard and Mc Donald Islands", &[]),
    CountryFormats::new("HN", "Honduras", &["#####"]),
    CountryFormats::new("HK", "Hong Kong", &[]),
    CountryFormats::new("HU", "Hungary", &["######", "#####", "####"]),
    CountryFormats::new("IS", "Iceland", &["###"]),
    CountryFormats::new("IN", "India", &["######", "### ###"]),
    CountryFormats::new("ID", "Indonesia", &["#####"]),
    CountryFormats::new("IR", "Iran", &["#####", "##### #####"]),
    CountryFormats::new("IQ", "Iraq", &["#####"]),
    CountryFormats::new("IE", "Ireland", &[]),
    CountryFormats::new("IM", "Isle of Man", &[]),
    CountryFormats::new("IL", "Israel", &["#######"]),
    CountryFormats::new("IT", "Italy", &["#####"]),
    CountryFormats::new("JM", "Jamaica", &["JM@@@##"]),
    CountryFormats::new("JP", "Japan", &["###-####", "#######"]),
    CountryFormats::new("JE", "Jersey", &[]),
    CountryFormats::new("JO", "Jordan", &["#####"]),
    CountryFormats::new("KZ", "Kazakhstan", &["######"]),
    CountryFormats::new("KE", "Kenya", &["#####"]),
    CountryFormats::new("KI", "Kiribati", &[]),
    CountryFormats::new("KW", "Kuwait", &["#####"]),
    CountryFormats::new("KG", "Kyrgyzstan", &["######"]),
    CountryFormats::new("LA", "Lao People's Democratic Republic", &["#####"]),
    CountryFormats::new("LV", "Latvia", &["####", "LV-####", "LV####"]),
    CountryFormats::new("LB", "Lebanon", &["####"]),
    CountryFormats::new("LS", "Lesotho", &["###"]),
    CountryFormats::new("LR", "Liberia", &["####"]),
    CountryFormats::new("LY", "Libyan Arab Jamahiriya", &["#####"]),
    CountryFormats::new("LI", "Liechtenstein", &["####"]),
    CountryFormats::new("LT", "Lithuania", &["#####"]),
    CountryFormats::new("LU", "Luxembourg", &["####", "L-####", "L####"]),
    CountryFormats::new("MO", "Macau", &[]),
    CountryFormats::new("MK", "Macedonia", &["####"]),
    CountryFormats::new("MG", "Madagascar", &["###"]),
    CountryFormats::new("MW", "Malawi", &[]),
    CountryFormats::new("MY", "Malaysia", &["#####"]),
    CountryFormats::new("MV", "Maldives", &["####", "#####"]),
    CountryFormats::new("ML", "Mali", &[]),
    CountryFormats::new("MT", "Malta", &["@@@ ####", "@@@####"]),
    CountryFormats::new("MH", "Marshall Islands", &["#####"]),
    CountryFormats::new("MQ", "Martinique", &["#####"]),
    CountryFormats::new("MR", "Mauritania", &[]),
    CountryFormats::new("MU", "Mauritius", &[]),
    CountryFormats::new("YT", "Mayotte", &["#####"]),
    CountryFormats::new("MX", "Mexico", &["#####", "####"]),
    CountryFormats::new("FM", "Micronesia", &["#####"]),
    CountryFormats::new("MD", "Moldova", &["####"]),
    CountryFormats::new("MC", "Monaco", &["#8000", "#####"]),
    CountryFormats::new("MN", "Mongolia", &["#####", "######"]),
    CountryFormats::new("ME", "Montenegro", &["#####"]),
    CountryFormats::new("MS", "Montserrat", &[]),
    CountryFormats::new("MA", "Morocco", &["#####"]),
    CountryFormats::new("MZ", "Mozambique", &["#####"]),
    CountryFormats::new("MM", "Myanmar", &["#####"]),
    CountryFormats::new("NA", "Namibia", &[]),
    CountryFormats::new("NR", "Nauru", &[]),
    CountryFormats::new("NP", "Nepal", &["#####"]),
    CountryFormats::new("NL", "Netherlands", &["#### @@", "####@@", "####"]),
    CountryFormats::new("AN", "Netherlands Antilles", &[]),
    CountryFormats::new("NC", "New Caledonia", &["#####"]),
    CountryFormats::new("NZ", "New Zealand", &["####"]),
    CountryFormats::new("NI", "Nicaragua", &["###-###-#"]),
    CountryFormats::new("NE", "Niger", &["####"]),
    CountryFormats::new("NG", "Nigeria", &["######"]),
    CountryFormats::new("NU", "Niue", &[]),
    CountryFormats::new("NF", "Norfolk Island", &[]),
    CountryFormats::new("KP", "North Korea", &["###"]),
    CountryFormats::new("MP", "Northern Mariana Islands", &["#####"]),
    CountryFormats::new("NO", "Norway", &["####"]),
    CountryFormats::new("OM", "Oman", &["###"]),
    CountryFormats::new("PK", "Pakistan", &["#####"]),
    CountryFormats::new("PW", "Palau", &["#####"]),
    CountryFormats::new("PS", "Palestinian Territory", &[]),
    CountryFormats::new("PA", "Panama", &[]),
    CountryFormats::new("PG", "Papua New Guinea", &["###"]),
    CountryFormats::new("PY", "Paraguay", &["####"]),
    CountryFormats::new("PE", "Peru", &["##"]),
    CountryFormats::new("PH", "Philippines", &["####"]),
    CountryFormats::new("PN", "Pitcairn", &[]),
    CountryFormats::new("PL", "Poland", &["##-###", "#####"]),
    CountryFormats::new("PT", "Portugal", &["####-###", "####"]),
    CountryFormats::new("PR", "Puerto Rico", &["#####"]),
    CountryFormats::new("QA", "Qatar", &[]),
    CountryFormats::new("RE", "Reunion", &["#####"]),
    CountryFormats::new("RO", "Romania", &["######"]),
    CountryFormats::new("RU", "Russia", &["######"]),
    CountryFormats::new("RW", "Rwanda", &[]),
    CountryFormats::new("BL", "Saint Barthelemy", &[]),
    CountryFormats::new("KN", "Saint Kitts and Nevis", &[]),
    CountryFormats::new("LC", "Saint Lucia", &[]),
    CountryFormats::new("VC", "Saint Vincent and the Grenadines", &[]),
    CountryFormats::new("MF", "Saint Martin", &[]),
    CountryFormats::new("WS", "Samoa", &["#####"]),
    CountryFormats::new("SM", "San Marino", &["#####"]),
    CountryFormats::new("ST", "Sao Tome and Principe", &[]),
    CountryFormats::new("SA", "Saudi Arabia", &["#####"]),
    CountryFormats::new("SN", "Senegal", &[]),
    CountryFormats::new("RS", "Serbia", &["#####"]),
    CountryFormats::new("SC", "Seychelles", &[]),
    CountryFormats::new("SL", "Sierra Leone", &[]),
    CountryFormats::new("SG", "Singapore", &["######"]),
    CountryFormats::new("SK", "Slovakia", &["### ##", "#####"]),
    CountryFormats::new("SI", "Slovenia", &["####"]),
    CountryFormats::new("SB", "Solomon Islands", &[]),
    CountryFormats::new("SO", "Somalia", &[]),
    CountryFormats::new("ZA", "South Africa", &["####"]),
    CountryFormats::new("GS", "South Georgia and the South Sandwich Islands", &[]),
    CountryFormats::new("KR", "South Korea", &["######", "###-###"]),
    CountryFormats::new("ES", "Spain", &["#####"]),
    CountryFormats::new("LK", "Sri Lanka", &["#####"]),
    CountryFormats::new("SH", "St. Helena", &[]),
    CountryFormats::new("PM", "St. Pierre and Miquelon", &["#####"]),
    CountryFormats::new("SD", "Sudan", &["#####"]),
    CountryFormats::new("SR", "Suriname", &[]),
    CountryFormats::new("SJ", "Svalbard and Jan Mayen Islands", &["####"]),
    CountryFormats::new("SZ", "Swaziland", &["@###"]),
    CountryFormats::new("SE", "Sweden", &["### ##", "#####"]),
    CountryFormats::new("CH", "Switzerland", &["####", "@###"]),
    CountryFormats::new("SY", "Syrian Arab Republic", &[]),
    CountryFormats::new("TW", "Taiwan", &["#####", "###"]),
    CountryFormats::new("TJ", "Tajikistan", &["######"]),
    CountryFormats::new("TZ", "Tanzania", &[]),
    CountryFormats::new("TH", "Thailand", &["#####"]),
    CountryFormats::new("TG", "Togo", &[]),
    CountryFormats::new("TK", "Tokelau", &[]),
    CountryFormats::new("TO", "Tonga", &[]),
    CountryFormats::new("TT", "Trinidad and Tobago", &[]),
    CountryFormats::new("TN", "Tunisia", &["####"]),
    CountryFormats::new("TR", "Turkey", &["#####"]),
    CountryFormats::new("TM", "Turkmenistan", &["######"]),
    CountryFormats::new("TC", "Turks and Caicos Islands", &["TKC@ 1ZZ"]),
    CountryFormats::new("TV", "Tuvalu", &[]),
    CountryFormats::new("UG", "Uganda", &[]),
    CountryFormats::new("GB", "United Kingdom", &["@# #@@", "@** #@@", "@@#* #@@"]),
    CountryFormats::new("UA", "Ukraine", &["#####"]),
    CountryFormats::new("AE", "United Arab Emirates", &[]),
    CountryFormats::new("UM", "United States Minor Outlying Islands", &[]),
    CountryFormats::new("UY", "Uruguay", &["#####"]),
    CountryFormats::new("US", "United States", &["#####", "#####-####"]),
    CountryFormats::new("UZ", "Uzbekistan", &["######"]),
    CountryFormats::new("VU", "Vanuatu", &[]),
    CountryFormats::new("VA", "Vatican City State", &["00120"]),
    CountryFormats::new("VE", "Venezuela", &["####"]),
    CountryFormats::new("VN", "Vietnam", &["######"]),
    CountryFormats::new("VG", "Virgin Islands (British)", &["VG11#0"]),
    CountryFormats::new("VI", "Virgin Islands (U.S.)", &[]),
    CountryFormats::new("WF", "Wallis and Futuna Islands", &["#####"]),
    CountryFormats::new("EH", "Western Sahara", &["#####"]),
    CountryFormats::new("YE", "Yemen", &[]),
    CountryFormats::new("ZM", "Zambia", &["#####"]),
    CountryFormats::new("ZW", "Zimbabwe", &[]),
];
