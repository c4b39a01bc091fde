//! Static enumeration tables: closed key sets with display labels.
//!
//! Pure read-only data. Tables are shared process-wide constants; fields
//! reference them through the schema catalog for membership checking.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// Closed mapping of valid enumeration keys to display labels.
pub struct Enumeration {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
    index: HashMap<&'static str, &'static str>,
}

impl Enumeration {
    fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        let index = entries.iter().copied().collect();
        Self {
            name,
            entries,
            index,
        }
    }

    /// Table name as referenced by field descriptors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when `key` is a member of the table.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Display label for `key`, when present.
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.index.get(key).copied()
    }

    /// All accepted keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Antenna path codes.
pub static ANT_PATH: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("AntPath", ANT_PATH_ENTRIES));

/// ARRL operating sections.
pub static ARRL_SECTION: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("ArrlSection", ARRL_SECTION_ENTRIES));

/// Amateur bands; labels give the MHz range as `lower-upper`.
pub static BAND: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Band", BAND_ENTRIES));

/// Continent abbreviations.
pub static CONTINENT: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Continent", CONTINENT_ENTRIES));

/// Award-credit identifiers.
pub static CREDIT: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Credit", CREDIT_ENTRIES));

/// DXCC entity codes.
pub static DXCC: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Dxcc", DXCC_ENTRIES));

/// Emission modes.
pub static MODE: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Mode", MODE_ENTRIES));

/// Propagation mode codes.
pub static PROPAGATION_MODE: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("PropagationMode", PROPAGATION_MODE_ENTRIES));

/// QSL confirmation mediums.
pub static QSL_MEDIUM: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslMedium", QSL_MEDIUM_ENTRIES));

/// QSL-received statuses.
pub static QSL_RCVD: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslRcvd", QSL_RCVD_ENTRIES));

/// QSL-sent statuses.
pub static QSL_SENT: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslSent", QSL_SENT_ENTRIES));

/// QSL routing codes.
pub static QSL_VIA: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslVia", QSL_VIA_ENTRIES));

/// QSO-complete statuses.
pub static QSL_COMPLETE: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslComplete", QSL_COMPLETE_ENTRIES));

/// Online-service upload statuses.
pub static QSL_UPLOAD_STATUS: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("QslUploadStatus", QSL_UPLOAD_STATUS_ENTRIES));

/// WAE/CQ region codes.
pub static REGION: LazyLock<Enumeration> =
    LazyLock::new(|| Enumeration::new("Region", REGION_ENTRIES));

static ANT_PATH_ENTRIES: &[(&str, &str)] = &[
    ("G", "grayline"),
    ("O", "other"),
    ("S", "short path"),
    ("L", "long path"),
];

static ARRL_SECTION_ENTRIES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AB", "Alberta"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("BC", "British Columbia"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("EB", "East Bay"),
    ("EMA", "Eastern Massachusetts"),
    ("ENY", "Eastern New York"),
    ("EPA", "Eastern Pennsylvania"),
    ("EWA", "Eastern Washington"),
    ("GA", "Georgia"),
    ("GTA", "Greater Toronto Area"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LAX", "Los Angeles"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MB", "Manitoba"),
    ("MAR", "Maritime"),
    ("MDC", "Maryland-DC"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NM", "New Mexico"),
    ("NLI", "New York City-Long Island"),
    ("NL", "Newfoundland/Labrador"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NTX", "North Texas"),
    ("NFL", "Northern Florida"),
    ("NNJ", "Northern New Jersey"),
    ("NNY", "Northern New York"),
    ("NT", "Northwest Territories/Yukon/Nunavut"),
    ("NWT", "Northwest Territories/Yukon/Nunavut"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("ON", "Ontario"),
    ("ONE", "Ontario East"),
    ("ONN", "Ontario North"),
    ("ONS", "Ontario South"),
    ("ORG", "Orange"),
    ("OR", "Oregon"),
    ("PAC", "Pacific"),
    ("PE", "Prince Edward Island"),
    ("PR", "Puerto Rico"),
    ("QC", "Quebec"),
    ("RI", "Rhode Island"),
    ("SV", "Sacramento Valley"),
    ("SDG", "San Diego"),
    ("SF", "San Francisco"),
    ("SJV", "San Joaquin Valley"),
    ("SB", "Santa Barbara"),
    ("SCV", "Santa Clara Valley"),
    ("SK", "Saskatchewan"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("STX", "South Texas"),
    ("SFL", "Southern Florida"),
    ("SNJ", "Southern New Jersey"),
    ("TN", "Tennessee"),
    ("VI", "US Virgin Islands"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WCF", "West Central Florida"),
    ("WTX", "West Texas"),
    ("WV", "West Virginia"),
    ("WMA", "Western Massachusetts"),
    ("WNY", "Western New York"),
    ("WPA", "Western Pennsylvania"),
    ("WWA", "Western Washington"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

static BAND_ENTRIES: &[(&str, &str)] = &[
    ("2190m", ".1357-.1378"),
    ("630m", ".472-.479"),
    ("560m", ".501-.504"),
    ("160m", "1.8-2.0"),
    ("80m", "3.5-4.0"),
    ("60m", "5.06-5.45"),
    ("40m", "7.0-7.3"),
    ("30m", "10.1-10.15"),
    ("20m", "14.0-14.35"),
    ("17m", "18.068-18.168"),
    ("15m", "21.0-21.45"),
    ("12m", "24.890-24.99"),
    ("10m", "28.0-29.7"),
    ("8m", "40-45"),
    ("6m", "50-54"),
    ("5m", "54.000001-69.9"),
    ("4m", "70-71"),
    ("2m", "144-148"),
    ("1.25m", "222-225"),
    ("70cm", "420-450"),
    ("33cm", "902-928"),
    ("23cm", "1240-1300"),
    ("13cm", "2300-2450"),
    ("9cm", "3300-3500"),
    ("6cm", "5650-5925"),
    ("3cm", "10000-10500"),
    ("1.25cm", "24000-24250"),
    ("6mm", "47000-47200"),
    ("4mm", "75500-81000"),
    ("2.5mm", "119980-123000"),
    ("2mm", "134000-149000"),
    ("1mm", "241000-250000"),
    ("submm", "300000-7500000"),
];

static CONTINENT_ENTRIES: &[(&str, &str)] = &[
    ("NA", "North America"),
    ("SA", "South America"),
    ("EU", "Europe"),
    ("AF", "Africa"),
    ("OC", "Oceana"),
    ("AS", "Asia"),
    ("AN", "Antarctica"),
];

static CREDIT_ENTRIES: &[(&str, &str)] = &[
    ("CQDX", "CQ Magazine DX Mixed"),
    ("CQDX_BAND", "CQ Magazine DX Band"),
    ("CQDX_MODE", "CQ Magazine DX Mode"),
    ("CQDX_MOBILE", "CQ Magazine DX Mobile"),
    ("CQDX_QRP", "CQ Magazine DX QRP"),
    ("CQDX_SATELLITE", "CQ Magazine DX Satellite"),
    ("CQDXFIELD", "CQ Magazine DX Field Mixed"),
    ("CQDXFIELD_BAND", "CQ Magazine DX Field Band"),
    ("CQDXFIELD_MODE", "CQ Magazine DX Field Mode"),
    ("CQDXFIELD_MOBILE", "CQ Magazine DX Field Mobile"),
    ("CQDXFIELD_QRP", "CQ Magazine DX Field QRP"),
    ("CQDXFIELD_SATELLITE", "CQ Magazine DX Field Satellite"),
    ("CQWAZ_MIXED", "CQ Magazine Worked All Zones (WAZ) Mixed"),
    ("CQWAZ_BAND", "CQ Magazine Worked All Zones (WAZ) Band"),
    ("CQWAZ_MODE", "CQ Magazine Worked All Zones (WAZ) Mode"),
    ("CQWAZ_SATELLITE", "CQ Magazine Worked All Zones (WAZ) Satellite"),
    ("CQWAZ_EME", "CQ Magazine Worked All Zones (WAZ) EME"),
    ("CQWAZ_MOBILE", "CQ Magazine Worked All Zones (WAZ) Mobile"),
    ("CQWAZ_QRP", "CQ Magazine Worked All Zones (WAZ) QRP"),
    ("CQWPX", "CQ Magazine WPX Mixed"),
    ("CQWPX_BAND", "CQ Magazine WPX Band"),
    ("CQWPX_MODE", "CQ Magazine WPX Mode"),
    ("DXCC", "ARRL DX Century Club (DXCC) Mixed"),
    ("DXCC_BAND", "ARRL DX Century Club (DXCC) Band"),
    ("DXCC_MODE", "ARRL DX Century Club (DXCC) Mode"),
    ("DXCC_SATELLITE", "ARRL DX Century Club (DXCC) Satellite"),
    ("EAUSTRALIA", "eQSL eAustralia Mixed"),
    ("ECANADA", "eQSL eCanada Mixed"),
    ("ECOUNTY_STATE", "eQSL eCounty State"),
    ("EDX", "eQSL eDX Mixed"),
    ("EDX100", "eQSL eDX100 Mixed"),
    ("EDX100_BAND", "eQSL eDX100 Band"),
    ("EDX100_MODE", "eQSL eDX100 Mode"),
    ("EECHOLINK50", "eQSL eEcholink50 Echolink"),
    ("EGRID_BAND", "eQSL eGrid Band"),
    ("EGRID_SATELLITE", "eQSL eGrid Satellite"),
    ("EPFX300", "eQSL ePfx300 Mixed"),
    ("EPFX300_MODE", "eQSL ePfx300 Mode"),
    ("EWAS", "eQSL eWAS Mixed"),
    ("EWAS_BAND", "eQSL eWAS Band"),
    ("EWAS_MODE", "eQSL eWAS Mode"),
    ("EWAS_SATELLITE", "eQSL eWAS Satellite"),
    ("EZ40", "eQSL eZ40 Mixed"),
    ("EZ40_MODE", "eQSL eZ40 Mode"),
    ("FFMA", "ARRL Fred Fish Memorial Award (FFMA) Mixed"),
    ("IOTA", "RSGB Islands on the Air (IOTA) Mixed"),
    ("IOTA_BASIC", "RSGB Islands on the Air (IOTA) Mixed"),
    ("IOTA_CONT", "RSGB Islands on the Air (IOTA) Continent"),
    ("IOTA_GROUP", "RSGB Islands on the Air (IOTA) Group"),
    ("RDA", "TAG Russian Districts Award (RDA) Mixed"),
    ("USACA", "CQ Magazine United States of America Counties (USA-CA) Mixed"),
    ("VUCC_BAND", "ARRL VHF/UHF Century Club Program (VUCC) Band"),
    ("VUCC_SATELLITE", "ARRL VHF/UHF Century Club Program (VUCC) Satellite"),
    ("WAB", "WAB AG Worked All Britain (WAB) Mixed"),
    ("WAC", "IARU Worked All Continents (WAC) Mixed"),
    ("WAC_BAND", "IARU Worked All Continents (WAC) Band"),
    ("WAE", "DARC Worked All Europe (WAE) Mixed"),
    ("WAE_BAND", "DARC Worked All Europe (WAE) Band"),
    ("WAE_MODE", "DARC Worked All Europe (WAE) Mode"),
    ("WAIP", "ARI Worked All Italian Provinces (WAIP) Mixed"),
    ("WAIP_BAND", "ARI Worked All Italian Provinces (WAIP) Band"),
    ("WAIP_MODE", "ARI Worked All Italian Provinces (WAIP) Mode"),
    ("WAS", "ARRL Worked All States (WAS) Mixed"),
    ("WAS_BAND", "ARRL Worked All States (WAS) Band"),
    ("WAS_EME", "ARRL Worked All States (WAS) EME"),
    ("WAS_MODE", "ARRL Worked All States (WAS) Mode"),
    ("WAS_NOVICE", "ARRL Worked All States (WAS) Novice"),
    ("WAS_QRP", "ARRL Worked All States (WAS) QRP"),
    ("WAS_SATELLITE", "ARRL Worked All States (WAS) Satellite"),
    ("WITUZ", "RSGB Worked ITU Zones (WITUZ) Mixed"),
    ("WITUZ_BAND", "RSGB Worked ITU Zones (WITUZ) Band"),
];

static DXCC_ENTRIES: &[(&str, &str)] = &[
    ("0", "None (the contacted station is known to not be within a DXCC entity)"),
    ("1", "CANADA"),
    ("2", "ABU AIL IS."),
    ("3", "AFGHANISTAN"),
    ("4", "AGALEGA & ST. BRANDON IS."),
    ("5", "ALAND IS."),
    ("6", "ALASKA"),
    ("7", "ALBANIA"),
    ("8", "ALDABRA"),
    ("9", "AMERICAN SAMOA"),
    ("10", "AMSTERDAM & ST. PAUL IS."),
    ("11", "ANDAMAN & NICOBAR IS."),
    ("12", "ANGUILLA"),
    ("13", "ANTARCTICA"),
    ("14", "ARMENIA"),
    ("15", "ASIATIC RUSSIA"),
    ("16", "NEW ZEALAND SUBANTARCTIC ISLANDS"),
    ("17", "AVES I."),
    ("18", "AZERBAIJAN"),
    ("19", "BAJO NUEVO"),
    ("20", "BAKER & HOWLAND IS."),
    ("21", "BALEARIC IS."),
    ("22", "PALAU"),
    ("23", "BLENHEIM REEF"),
    ("24", "BOUVET"),
    ("25", "BRITISH NORTH BORNEO"),
    ("26", "BRITISH SOMALILAND"),
    ("27", "BELARUS"),
    ("28", "CANAL ZONE"),
    ("29", "CANARY IS."),
    ("30", "CELEBE & MOLUCCA IS."),
    ("31", "C. KIRIBATI (BRITISH PHOENIX IS.)"),
    ("32", "CEUTA & MELILLA"),
    ("33", "CHAGOS IS."),
    ("34", "CHATHAM IS."),
    ("35", "CHRISTMAS I."),
    ("36", "CLIPPERTON I."),
    ("37", "COCOS I."),
    ("38", "COCOS (KEELING) IS."),
    ("39", "COMOROS"),
    ("40", "CRETE"),
    ("41", "CROZET I."),
    ("42", "DAMAO, DIU"),
    ("43", "DESECHEO I."),
    ("44", "DESROCHES"),
    ("45", "DODECANESE"),
    ("46", "EAST MALAYSIA"),
    ("47", "EASTER I."),
    ("48", "E. KIRIBATI (LINE IS.)"),
    ("49", "EQUATORIAL GUINEA"),
    ("50", "MEXICO"),
    ("51", "ERITREA"),
    ("52", "ESTONIA"),
    ("53", "ETHIOPIA"),
    ("54", "EUROPEAN RUSSIA"),
    ("55", "FARQUHAR"),
    ("56", "FERNANDO DE NORONHA"),
    ("57", "FRENCH EQUATORIAL AFRICA"),
    ("58", "FRENCH INDO-CHINA"),
    ("59", "FRENCH WEST AFRICA"),
    ("60", "BAHAMAS"),
    ("61", "FRANZ JOSEF LAND"),
    ("62", "BARBADOS"),
    ("63", "FRENCH GUIANA"),
    ("64", "BERMUDA"),
    ("65", "BRITISH VIRGIN IS."),
    ("66", "BELIZE"),
    ("67", "FRENCH INDIA"),
    ("68", "KUWAIT/SAUDI ARABIA NEUTRAL ZONE"),
    ("69", "CAYMAN IS."),
    ("70", "CUBA"),
    ("71", "GALAPAGOS IS."),
    ("72", "DOMINICAN REPUBLIC"),
    ("74", "EL SALVADOR"),
    ("75", "GEORGIA"),
    ("76", "GUATEMALA"),
    ("77", "GRENADA"),
    ("78", "HAITI"),
    ("79", "GUADELOUPE"),
    ("80", "HONDURAS"),
    ("81", "GERMANY"),
    ("82", "JAMAICA"),
    ("84", "MARTINIQUE"),
    ("85", "BONAIRE, CURACAO"),
    ("86", "NICARAGUA"),
    ("88", "PANAMA"),
    ("89", "TURKS & CAICOS IS."),
    ("90", "TRINIDAD & TOBAGO"),
    ("91", "ARUBA"),
    ("93", "GEYSER REEF"),
    ("94", "ANTIGUA & BARBUDA"),
    ("95", "DOMINICA"),
    ("96", "MONTSERRAT"),
    ("97", "ST. LUCIA"),
    ("98", "ST. VINCENT"),
    ("99", "GLORIOSO IS."),
    ("100", "ARGENTINA"),
    ("101", "GOA"),
    ("102", "GOLD COAST, TOGOLAND"),
    ("103", "GUAM"),
    ("104", "BOLIVIA"),
    ("105", "GUANTANAMO BAY"),
    ("106", "GUERNSEY"),
    ("107", "GUINEA"),
    ("108", "BRAZIL"),
    ("109", "GUINEA-BISSAU"),
    ("110", "HAWAII"),
    ("111", "HEARD I."),
    ("112", "CHILE"),
    ("113", "IFNI"),
    ("114", "ISLE OF MAN"),
    ("115", "ITALIAN SOMALILAND"),
    ("116", "COLOMBIA"),
    ("117", "ITU HQ"),
    ("118", "JAN MAYEN"),
    ("119", "JAVA"),
    ("120", "ECUADOR"),
    ("122", "JERSEY"),
    ("123", "JOHNSTON I."),
    ("124", "JUAN DE NOVA, EUROPA"),
    ("125", "JUAN FERNANDEZ IS."),
    ("126", "KALININGRAD"),
    ("127", "KAMARAN IS."),
    ("128", "KARELO-FINNISH REPUBLIC"),
    ("129", "GUYANA"),
    ("130", "KAZAKHSTAN"),
    ("131", "KERGUELEN IS."),
    ("132", "PARAGUAY"),
    ("133", "KERMADEC IS."),
    ("134", "KINGMAN REEF"),
    ("135", "KYRGYZSTAN"),
    ("136", "PERU"),
    ("137", "REPUBLIC OF KOREA"),
    ("138", "KURE I."),
    ("139", "KURIA MURIA I."),
    ("140", "SURINAME"),
    ("141", "FALKLAND IS."),
    ("142", "LAKSHADWEEP IS."),
    ("143", "LAOS"),
    ("144", "URUGUAY"),
    ("145", "LATVIA"),
    ("146", "LITHUANIA"),
    ("147", "LORD HOWE I."),
    ("148", "VENEZUELA"),
    ("149", "AZORES"),
    ("150", "AUSTRALIA"),
    ("151", "MALYJ VYSOTSKIJ I."),
    ("152", "MACAO"),
    ("153", "MACQUARIE I."),
    ("154", "YEMEN ARAB REPUBLIC"),
    ("155", "MALAYA"),
    ("157", "NAURU"),
    ("158", "VANUATU"),
    ("159", "MALDIVES"),
    ("160", "TONGA"),
    ("161", "MALPELO I."),
    ("162", "NEW CALEDONIA"),
    ("163", "PAPUA NEW GUINEA"),
    ("164", "MANCHURIA"),
    ("165", "MAURITIUS"),
    ("166", "MARIANA IS."),
    ("167", "MARKET REEF"),
    ("168", "MARSHALL IS."),
    ("169", "MAYOTTE"),
    ("170", "NEW ZEALAND"),
    ("171", "MELLISH REEF"),
    ("172", "PITCAIRN I."),
    ("173", "MICRONESIA"),
    ("174", "MIDWAY I."),
    ("175", "FRENCH POLYNESIA"),
    ("176", "FIJI"),
    ("177", "MINAMI TORISHIMA"),
    ("178", "MINERVA REEF"),
    ("179", "MOLDOVA"),
    ("180", "MOUNT ATHOS"),
    ("181", "MOZAMBIQUE"),
    ("182", "NAVASSA I."),
    ("183", "NETHERLANDS BORNEO"),
    ("184", "NETHERLANDS NEW GUINEA"),
    ("185", "SOLOMON IS."),
    ("186", "NEWFOUNDLAND, LABRADOR"),
    ("187", "NIGER"),
    ("188", "NIUE"),
    ("189", "NORFOLK I."),
    ("190", "SAMOA"),
    ("191", "NORTH COOK IS."),
    ("192", "OGASAWARA"),
    ("193", "OKINAWA (RYUKYU IS.)"),
    ("194", "OKINO TORI-SHIMA"),
    ("195", "ANNOBON I."),
    ("196", "PALESTINE"),
    ("197", "PALMYRA & JARVIS IS."),
    ("198", "PAPUA TERRITORY"),
    ("199", "PETER 1 I."),
    ("200", "PORTUGUESE TIMOR"),
    ("201", "PRINCE EDWARD & MARION IS."),
    ("202", "PUERTO RICO"),
    ("203", "ANDORRA"),
    ("204", "REVILLAGIGEDO"),
    ("205", "ASCENSION I."),
    ("206", "AUSTRIA"),
    ("207", "RODRIGUEZ I."),
    ("208", "RUANDA-URUNDI"),
    ("209", "BELGIUM"),
    ("210", "SAAR"),
    ("211", "SABLE I."),
    ("212", "BULGARIA"),
    ("213", "SAINT MARTIN"),
    ("214", "CORSICA"),
    ("215", "CYPRUS"),
    ("216", "SAN ANDRES & PROVIDENCIA"),
    ("217", "SAN FELIX & SAN AMBROSIO"),
    ("218", "CZECHOSLOVAKIA"),
    ("219", "SAO TOME & PRINCIPE"),
    ("220", "SARAWAK"),
    ("221", "DENMARK"),
    ("222", "FAROE IS."),
    ("223", "ENGLAND"),
    ("224", "FINLAND"),
    ("225", "SARDINIA"),
    ("226", "SAUDI ARABIA/IRAQ NEUTRAL ZONE"),
    ("227", "FRANCE"),
    ("228", "SERRANA BANK & RONCADOR CAY"),
    ("229", "GERMAN DEMOCRATIC REPUBLIC"),
    ("230", "FEDERAL REPUBLIC OF GERMANY"),
    ("231", "SIKKIM"),
    ("232", "SOMALIA"),
    ("233", "GIBRALTAR"),
    ("234", "SOUTH COOK IS."),
    ("235", "SOUTH GEORGIA I."),
    ("236", "GREECE"),
    ("237", "GREENLAND"),
    ("238", "SOUTH ORKNEY IS."),
    ("239", "HUNGARY"),
    ("240", "SOUTH SANDWICH IS."),
    ("241", "SOUTH SHETLAND IS."),
    ("242", "ICELAND"),
    ("243", "PEOPLE'S DEMOCRATIC REP. OF YEMEN"),
    ("244", "SOUTHERN SUDAN"),
    ("245", "IRELAND"),
    ("246", "SOVEREIGN MILITARY ORDER OF MALTA"),
    ("247", "SPRATLY IS."),
    ("248", "ITALY"),
    ("249", "ST. KITTS & NEVIS"),
    ("250", "ST. HELENA"),
    ("251", "LIECHTENSTEIN"),
    ("252", "ST. PAUL I."),
    ("253", "ST. PETER & ST. PAUL ROCKS"),
    ("254", "LUXEMBOURG"),
    ("255", "ST. MAARTEN, SABA, ST. EUSTATIUS"),
    ("256", "MADEIRA IS."),
    ("257", "MALTA"),
    ("258", "SUMATRA"),
    ("259", "SVALBARD"),
    ("260", "MONACO"),
    ("261", "SWAN IS."),
    ("262", "TAJIKISTAN"),
    ("263", "NETHERLANDS"),
    ("264", "TANGIER"),
    ("265", "NORTHERN IRELAND"),
    ("266", "NORWAY"),
    ("267", "TERRITORY OF NEW GUINEA"),
    ("268", "TIBET"),
    ("269", "POLAND"),
    ("270", "TOKELAU IS."),
    ("271", "TRIESTE"),
    ("272", "PORTUGAL"),
    ("273", "TRINDADE & MARTIM VAZ IS."),
    ("274", "TRISTAN DA CUNHA & GOUGH I."),
    ("275", "ROMANIA"),
    ("276", "TROMELIN I."),
    ("277", "ST. PIERRE & MIQUELON"),
    ("278", "SAN MARINO"),
    ("279", "SCOTLAND"),
    ("280", "TURKMENISTAN"),
    ("281", "SPAIN"),
    ("282", "TUVALU"),
    ("283", "UK SOVEREIGN BASE AREAS ON CYPRUS"),
    ("284", "SWEDEN"),
    ("285", "VIRGIN IS."),
    ("286", "UGANDA"),
    ("287", "SWITZERLAND"),
    ("288", "UKRAINE"),
    ("289", "UNITED NATIONS HQ"),
    ("291", "UNITED STATES OF AMERICA"),
    ("292", "UZBEKISTAN"),
    ("293", "VIET NAM"),
    ("294", "WALES"),
    ("295", "VATICAN"),
    ("296", "SERBIA"),
    ("297", "WAKE I."),
    ("298", "WALLIS & FUTUNA IS."),
    ("299", "WEST MALAYSIA"),
    ("301", "W. KIRIBATI (GILBERT IS. )"),
    ("302", "WESTERN SAHARA"),
    ("303", "WILLIS I."),
    ("304", "BAHRAIN"),
    ("305", "BANGLADESH"),
    ("306", "BHUTAN"),
    ("307", "ZANZIBAR"),
    ("308", "COSTA RICA"),
    ("309", "MYANMAR"),
    ("312", "CAMBODIA"),
    ("315", "SRI LANKA"),
    ("318", "CHINA"),
    ("321", "HONG KONG"),
    ("324", "INDIA"),
    ("327", "INDONESIA"),
    ("330", "IRAN"),
    ("333", "IRAQ"),
    ("336", "ISRAEL"),
    ("339", "JAPAN"),
    ("342", "JORDAN"),
    ("344", "DEMOCRATIC PEOPLE'S REP. OF KOREA"),
    ("345", "BRUNEI DARUSSALAM"),
    ("348", "KUWAIT"),
    ("354", "LEBANON"),
    ("363", "MONGOLIA"),
    ("369", "NEPAL"),
    ("370", "OMAN"),
    ("372", "PAKISTAN"),
    ("375", "PHILIPPINES"),
    ("376", "QATAR"),
    ("378", "SAUDI ARABIA"),
    ("379", "SEYCHELLES"),
    ("381", "SINGAPORE"),
    ("382", "DJIBOUTI"),
    ("384", "SYRIA"),
    ("386", "TAIWAN"),
    ("387", "THAILAND"),
    ("390", "TURKEY"),
    ("391", "UNITED ARAB EMIRATES"),
    ("400", "ALGERIA"),
    ("401", "ANGOLA"),
    ("402", "BOTSWANA"),
    ("404", "BURUNDI"),
    ("406", "CAMEROON"),
    ("408", "CENTRAL AFRICA"),
    ("409", "CAPE VERDE"),
    ("410", "CHAD"),
    ("411", "COMOROS"),
    ("412", "REPUBLIC OF THE CONGO"),
    ("414", "DEMOCRATIC REPUBLIC OF THE CONGO"),
    ("416", "BENIN"),
    ("420", "GABON"),
    ("422", "THE GAMBIA"),
    ("424", "GHANA"),
    ("428", "COTE D'IVOIRE"),
    ("430", "KENYA"),
    ("432", "LESOTHO"),
    ("434", "LIBERIA"),
    ("436", "LIBYA"),
    ("438", "MADAGASCAR"),
    ("440", "MALAWI"),
    ("442", "MALI"),
    ("444", "MAURITANIA"),
    ("446", "MOROCCO"),
    ("450", "NIGERIA"),
    ("452", "ZIMBABWE"),
    ("453", "REUNION I."),
    ("454", "RWANDA"),
    ("456", "SENEGAL"),
    ("458", "SIERRA LEONE"),
    ("460", "ROTUMA I."),
    ("462", "SOUTH AFRICA"),
    ("464", "NAMIBIA"),
    ("466", "SUDAN"),
    ("468", "SWAZILAND"),
    ("470", "TANZANIA"),
    ("474", "TUNISIA"),
    ("478", "EGYPT"),
    ("480", "BURKINA FASO"),
    ("482", "ZAMBIA"),
    ("483", "TOGO"),
    ("488", "WALVIS BAY"),
    ("489", "CONWAY REEF"),
    ("490", "BANABA I. (OCEAN I.)"),
    ("492", "YEMEN"),
    ("493", "PENGUIN IS."),
    ("497", "CROATIA"),
    ("499", "SLOVENIA"),
    ("501", "BOSNIA-HERZEGOVINA"),
    ("502", "MACEDONIA"),
    ("503", "CZECH REPUBLIC"),
    ("504", "SLOVAK REPUBLIC"),
    ("505", "PRATAS I."),
    ("506", "SCARBOROUGH REEF"),
    ("507", "TEMOTU PROVINCE"),
    ("508", "AUSTRAL I."),
    ("509", "MARQUESAS IS."),
    ("510", "PALESTINE"),
    ("511", "TIMOR-LESTE"),
    ("512", "CHESTERFIELD IS."),
    ("513", "DUCIE I."),
    ("514", "MONTENEGRO"),
    ("515", "SWAINS I."),
    ("516", "SAINT BARTHELEMY"),
    ("517", "CURACAO"),
    ("518", "ST MAARTEN"),
    ("519", "SABA & ST. EUSTATIUS"),
    ("520", "BONAIRE"),
    ("521", "SOUTH SUDAN (REPUBLIC OF)"),
    ("522", "REPUBLIC OF KOSOVO"),
];

static MODE_ENTRIES: &[(&str, &str)] = &[
    ("AM", "AM"),
    ("ARDOP", "ARDOP"),
    ("ATV", "ATV"),
    ("CHIP", "CHIP"),
    ("CLO", "CLO"),
    ("CONTESTI", "CONTESTI"),
    ("CW", "CW"),
    ("DIGITALVOICE", "DIGITALVOICE"),
    ("DOMINO", "DOMINO"),
    ("DYNAMIC", "DYNAMIC"),
    ("FAX", "FAX"),
    ("FM", "FM"),
    ("FSK441", "FSK441"),
    ("FT8", "FT8"),
    ("HELL", "HELL"),
    ("ISCAT", "ISCAT"),
    ("JT4", "JT4"),
    ("JT6M", "JT6M"),
    ("JT9", "JT9"),
    ("JT44", "JT44"),
    ("JT65", "JT65"),
    ("MFSK", "MFSK"),
    ("MSK144", "MSK144"),
    ("MT63", "MT63"),
    ("OLIVIA", "OLIVIA"),
    ("OPERA", "OPERA"),
    ("PAC", "PAC"),
    ("PAX", "PAX"),
    ("PKT", "PKT"),
    ("PSK", "PSK"),
    ("PSK2K", "PSK2K"),
    ("Q15", "Q15"),
    ("QRA64", "QRA64"),
    ("ROS", "ROS"),
    ("RTTY", "RTTY"),
    ("RTTYM", "RTTYM"),
    ("SSB", "SSB"),
    ("SSTV", "SSTV"),
    ("T10", "T10"),
    ("THOR", "THOR"),
    ("THRB", "THRB"),
    ("TOR", "TOR"),
    ("V4", "V4"),
    ("VOI", "VOI"),
    ("WINMOR", "WINMOR"),
    ("WSPR", "WSPR"),
];

static PROPAGATION_MODE_ENTRIES: &[(&str, &str)] = &[
    ("AS", "Aircraft Scatter"),
    ("AUE", "Aurora-E"),
    ("AUR", "Aurora"),
    ("BS", "Back scatter"),
    ("ECH", "EchoLink"),
    ("EME", "Earth-Moon-Earth"),
    ("ES", "Sporadic E"),
    ("F2", "F2 Reflection"),
    ("FAI", "Field Aligned Irregularities"),
    ("GWAVE", "Ground Wave"),
    ("INTERNET", "Internet-assisted"),
    ("ION", "Ionoscatter"),
    ("IRL", "IRLP"),
    ("LOS", "Line of Sight (includes transmission through obstacles such as walls)"),
    ("MS", "Meteor scatter"),
    ("RPT", "Terrestrial or atmospheric repeater or transponder"),
    ("RS", "Rain scatter"),
    ("SAT", "Satellite"),
    ("TEP", "Trans-equatorial"),
    ("TR", "Tropospheric ducting"),
];

static QSL_MEDIUM_ENTRIES: &[(&str, &str)] = &[
    ("CARD", "QSO confirmation via paper QSL card"),
    ("EQSL", "QSO confirmation via eQSL.cc"),
    ("LOTW", "QSO confirmation via ARRL Logbook of the World"),
];

static QSL_RCVD_ENTRIES: &[(&str, &str)] = &[
    ("Y", "yes (confirmed)"),
    ("N", "no"),
    ("R", "requested"),
    ("I", "ignore or invalid"),
    ("V", "verified"),
];

static QSL_SENT_ENTRIES: &[(&str, &str)] = &[
    ("Y", "yes"),
    ("N", "no"),
    ("R", "requested"),
    ("Q", "queued"),
    ("I", "ignore or invalid"),
];

static QSL_VIA_ENTRIES: &[(&str, &str)] = &[
    ("B", "bureau"),
    ("D", "direct"),
    ("E", "electronic"),
    ("M", "manager"),
];

static QSL_COMPLETE_ENTRIES: &[(&str, &str)] = &[
    ("Y", "yes"),
    ("N", "no"),
    ("NIL", "not heard"),
    ("?", "uncertain"),
];

static QSL_UPLOAD_STATUS_ENTRIES: &[(&str, &str)] = &[
    ("Y", "the QSO has been uploaded to, and accepted by, the online service"),
    ("N", "do not upload the QSO to the online service"),
    ("M", "the QSO has been modified since being uploaded to the online service"),
];

static REGION_ENTRIES: &[(&str, &str)] = &[
    ("NONE", "Not within a WAE or CQ region that is within a DXCC entity"),
    ("IV", "ITU Vienna"),
    ("AI", "African Italy"),
    ("SY", "Sicily"),
    ("BI", "Bear Island"),
    ("SI", "Shetland Islands"),
    ("KO", "Kosovo"),
    ("ET", "European Turkey"),
];
