//! HTML5 named character references.
//!
//! The full WHATWG list in its semicolon-terminated form, sorted by expansion. A few
//! references expand to two code points. When several names share an expansion the
//! first entry in [`ENTITIES`] is the one used for encoding: HTML 4 names come first,
//! then the shortest name.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(name, expansion)` pairs, names without `&` and `;`.
pub const ENTITIES: &[(&str, &str)] = &[
    ("Tab", "\u{9}"),
    ("NewLine", "\u{a}"),
    ("excl", "!"),
    ("quot", "\""),
    ("QUOT", "\""),
    ("num", "#"),
    ("dollar", "$"),
    ("percnt", "%"),
    ("amp", "&"),
    ("AMP", "&"),
    ("apos", "'"),
    ("lpar", "("),
    ("rpar", ")"),
    ("ast", "*"),
    ("midast", "*"),
    ("plus", "+"),
    ("comma", ","),
    ("period", "."),
    ("sol", "/"),
    ("colon", ":"),
    ("semi", ";"),
    ("lt", "<"),
    ("LT", "<"),
    ("nvlt", "<\u{20d2}"),
    ("equals", "="),
    ("bne", "=\u{20e5}"),
    ("gt", ">"),
    ("GT", ">"),
    ("nvgt", ">\u{20d2}"),
    ("quest", "?"),
    ("commat", "@"),
    ("lsqb", "["),
    ("lbrack", "["),
    ("bsol", "\\"),
    ("rsqb", "]"),
    ("rbrack", "]"),
    ("Hat", "^"),
    ("lowbar", "_"),
    ("UnderBar", "_"),
    ("grave", "`"),
    ("DiacriticalGrave", "`"),
    ("fjlig", "fj"),
    ("lcub", "{"),
    ("lbrace", "{"),
    ("vert", "|"),
    ("verbar", "|"),
    ("VerticalLine", "|"),
    ("rcub", "}"),
    ("rbrace", "}"),
    ("nbsp", "\u{a0}"),
    ("NonBreakingSpace", "\u{a0}"),
    ("iexcl", "\u{a1}"),
    ("cent", "\u{a2}"),
    ("pound", "\u{a3}"),
    ("curren", "\u{a4}"),
    ("yen", "\u{a5}"),
    ("brvbar", "\u{a6}"),
    ("sect", "\u{a7}"),
    ("uml", "\u{a8}"),
    ("die", "\u{a8}"),
    ("Dot", "\u{a8}"),
    ("DoubleDot", "\u{a8}"),
    ("copy", "\u{a9}"),
    ("COPY", "\u{a9}"),
    ("ordf", "\u{aa}"),
    ("laquo", "\u{ab}"),
    ("not", "\u{ac}"),
    ("shy", "\u{ad}"),
    ("reg", "\u{ae}"),
    ("REG", "\u{ae}"),
    ("circledR", "\u{ae}"),
    ("macr", "\u{af}"),
    ("strns", "\u{af}"),
    ("deg", "\u{b0}"),
    ("plusmn", "\u{b1}"),
    ("pm", "\u{b1}"),
    ("PlusMinus", "\u{b1}"),
    ("sup2", "\u{b2}"),
    ("sup3", "\u{b3}"),
    ("acute", "\u{b4}"),
    ("DiacriticalAcute", "\u{b4}"),
    ("micro", "\u{b5}"),
    ("para", "\u{b6}"),
    ("middot", "\u{b7}"),
    ("centerdot", "\u{b7}"),
    ("CenterDot", "\u{b7}"),
    ("cedil", "\u{b8}"),
    ("Cedilla", "\u{b8}"),
    ("sup1", "\u{b9}"),
    ("ordm", "\u{ba}"),
    ("raquo", "\u{bb}"),
    ("frac14", "\u{bc}"),
    ("frac12", "\u{bd}"),
    ("half", "\u{bd}"),
    ("frac34", "\u{be}"),
    ("iquest", "\u{bf}"),
    ("Agrave", "\u{c0}"),
    ("Aacute", "\u{c1}"),
    ("Acirc", "\u{c2}"),
    ("Atilde", "\u{c3}"),
    ("Auml", "\u{c4}"),
    ("Aring", "\u{c5}"),
    ("angst", "\u{c5}"),
    ("AElig", "\u{c6}"),
    ("Ccedil", "\u{c7}"),
    ("Egrave", "\u{c8}"),
    ("Eacute", "\u{c9}"),
    ("Ecirc", "\u{ca}"),
    ("Euml", "\u{cb}"),
    ("Igrave", "\u{cc}"),
    ("Iacute", "\u{cd}"),
    ("Icirc", "\u{ce}"),
    ("Iuml", "\u{cf}"),
    ("ETH", "\u{d0}"),
    ("Ntilde", "\u{d1}"),
    ("Ograve", "\u{d2}"),
    ("Oacute", "\u{d3}"),
    ("Ocirc", "\u{d4}"),
    ("Otilde", "\u{d5}"),
    ("Ouml", "\u{d6}"),
    ("times", "\u{d7}"),
    ("Oslash", "\u{d8}"),
    ("Ugrave", "\u{d9}"),
    ("Uacute", "\u{da}"),
    ("Ucirc", "\u{db}"),
    ("Uuml", "\u{dc}"),
    ("Yacute", "\u{dd}"),
    ("THORN", "\u{de}"),
    ("szlig", "\u{df}"),
    ("agrave", "\u{e0}"),
    ("aacute", "\u{e1}"),
    ("acirc", "\u{e2}"),
    ("atilde", "\u{e3}"),
    ("auml", "\u{e4}"),
    ("aring", "\u{e5}"),
    ("aelig", "\u{e6}"),
    ("ccedil", "\u{e7}"),
    ("egrave", "\u{e8}"),
    ("eacute", "\u{e9}"),
    ("ecirc", "\u{ea}"),
    ("euml", "\u{eb}"),
    ("igrave", "\u{ec}"),
    ("iacute", "\u{ed}"),
    ("icirc", "\u{ee}"),
    ("iuml", "\u{ef}"),
    ("eth", "\u{f0}"),
    ("ntilde", "\u{f1}"),
    ("ograve", "\u{f2}"),
    ("oacute", "\u{f3}"),
    ("ocirc", "\u{f4}"),
    ("otilde", "\u{f5}"),
    ("ouml", "\u{f6}"),
    ("divide", "\u{f7}"),
    ("div", "\u{f7}"),
    ("oslash", "\u{f8}"),
    ("ugrave", "\u{f9}"),
    ("uacute", "\u{fa}"),
    ("ucirc", "\u{fb}"),
    ("uuml", "\u{fc}"),
    ("yacute", "\u{fd}"),
    ("thorn", "\u{fe}"),
    ("yuml", "\u{ff}"),
    ("Amacr", "\u{100}"),
    ("amacr", "\u{101}"),
    ("Abreve", "\u{102}"),
    ("abreve", "\u{103}"),
    ("Aogon", "\u{104}"),
    ("aogon", "\u{105}"),
    ("Cacute", "\u{106}"),
    ("cacute", "\u{107}"),
    ("Ccirc", "\u{108}"),
    ("ccirc", "\u{109}"),
    ("Cdot", "\u{10a}"),
    ("cdot", "\u{10b}"),
    ("Ccaron", "\u{10c}"),
    ("ccaron", "\u{10d}"),
    ("Dcaron", "\u{10e}"),
    ("dcaron", "\u{10f}"),
    ("Dstrok", "\u{110}"),
    ("dstrok", "\u{111}"),
    ("Emacr", "\u{112}"),
    ("emacr", "\u{113}"),
    ("Edot", "\u{116}"),
    ("edot", "\u{117}"),
    ("Eogon", "\u{118}"),
    ("eogon", "\u{119}"),
    ("Ecaron", "\u{11a}"),
    ("ecaron", "\u{11b}"),
    ("Gcirc", "\u{11c}"),
    ("gcirc", "\u{11d}"),
    ("Gbreve", "\u{11e}"),
    ("gbreve", "\u{11f}"),
    ("Gdot", "\u{120}"),
    ("gdot", "\u{121}"),
    ("Gcedil", "\u{122}"),
    ("Hcirc", "\u{124}"),
    ("hcirc", "\u{125}"),
    ("Hstrok", "\u{126}"),
    ("hstrok", "\u{127}"),
    ("Itilde", "\u{128}"),
    ("itilde", "\u{129}"),
    ("Imacr", "\u{12a}"),
    ("imacr", "\u{12b}"),
    ("Iogon", "\u{12e}"),
    ("iogon", "\u{12f}"),
    ("Idot", "\u{130}"),
    ("imath", "\u{131}"),
    ("inodot", "\u{131}"),
    ("IJlig", "\u{132}"),
    ("ijlig", "\u{133}"),
    ("Jcirc", "\u{134}"),
    ("jcirc", "\u{135}"),
    ("Kcedil", "\u{136}"),
    ("kcedil", "\u{137}"),
    ("kgreen", "\u{138}"),
    ("Lacute", "\u{139}"),
    ("lacute", "\u{13a}"),
    ("Lcedil", "\u{13b}"),
    ("lcedil", "\u{13c}"),
    ("Lcaron", "\u{13d}"),
    ("lcaron", "\u{13e}"),
    ("Lmidot", "\u{13f}"),
    ("lmidot", "\u{140}"),
    ("Lstrok", "\u{141}"),
    ("lstrok", "\u{142}"),
    ("Nacute", "\u{143}"),
    ("nacute", "\u{144}"),
    ("Ncedil", "\u{145}"),
    ("ncedil", "\u{146}"),
    ("Ncaron", "\u{147}"),
    ("ncaron", "\u{148}"),
    ("napos", "\u{149}"),
    ("ENG", "\u{14a}"),
    ("eng", "\u{14b}"),
    ("Omacr", "\u{14c}"),
    ("omacr", "\u{14d}"),
    ("Odblac", "\u{150}"),
    ("odblac", "\u{151}"),
    ("OElig", "\u{152}"),
    ("oelig", "\u{153}"),
    ("Racute", "\u{154}"),
    ("racute", "\u{155}"),
    ("Rcedil", "\u{156}"),
    ("rcedil", "\u{157}"),
    ("Rcaron", "\u{158}"),
    ("rcaron", "\u{159}"),
    ("Sacute", "\u{15a}"),
    ("sacute", "\u{15b}"),
    ("Scirc", "\u{15c}"),
    ("scirc", "\u{15d}"),
    ("Scedil", "\u{15e}"),
    ("scedil", "\u{15f}"),
    ("Scaron", "\u{160}"),
    ("scaron", "\u{161}"),
    ("Tcedil", "\u{162}"),
    ("tcedil", "\u{163}"),
    ("Tcaron", "\u{164}"),
    ("tcaron", "\u{165}"),
    ("Tstrok", "\u{166}"),
    ("tstrok", "\u{167}"),
    ("Utilde", "\u{168}"),
    ("utilde", "\u{169}"),
    ("Umacr", "\u{16a}"),
    ("umacr", "\u{16b}"),
    ("Ubreve", "\u{16c}"),
    ("ubreve", "\u{16d}"),
    ("Uring", "\u{16e}"),
    ("uring", "\u{16f}"),
    ("Udblac", "\u{170}"),
    ("udblac", "\u{171}"),
    ("Uogon", "\u{172}"),
    ("uogon", "\u{173}"),
    ("Wcirc", "\u{174}"),
    ("wcirc", "\u{175}"),
    ("Ycirc", "\u{176}"),
    ("ycirc", "\u{177}"),
    ("Yuml", "\u{178}"),
    ("Zacute", "\u{179}"),
    ("zacute", "\u{17a}"),
    ("Zdot", "\u{17b}"),
    ("zdot", "\u{17c}"),
    ("Zcaron", "\u{17d}"),
    ("zcaron", "\u{17e}"),
    ("fnof", "\u{192}"),
    ("imped", "\u{1b5}"),
    ("gacute", "\u{1f5}"),
    ("jmath", "\u{237}"),
    ("circ", "\u{2c6}"),
    ("caron", "\u{2c7}"),
    ("Hacek", "\u{2c7}"),
    ("breve", "\u{2d8}"),
    ("Breve", "\u{2d8}"),
    ("dot", "\u{2d9}"),
    ("DiacriticalDot", "\u{2d9}"),
    ("ring", "\u{2da}"),
    ("ogon", "\u{2db}"),
    ("tilde", "\u{2dc}"),
    ("DiacriticalTilde", "\u{2dc}"),
    ("dblac", "\u{2dd}"),
    ("DiacriticalDoubleAcute", "\u{2dd}"),
    ("DownBreve", "\u{311}"),
    ("Alpha", "\u{391}"),
    ("Beta", "\u{392}"),
    ("Gamma", "\u{393}"),
    ("Delta", "\u{394}"),
    ("Epsilon", "\u{395}"),
    ("Zeta", "\u{396}"),
    ("Eta", "\u{397}"),
    ("Theta", "\u{398}"),
    ("Iota", "\u{399}"),
    ("Kappa", "\u{39a}"),
    ("Lambda", "\u{39b}"),
    ("Mu", "\u{39c}"),
    ("Nu", "\u{39d}"),
    ("Xi", "\u{39e}"),
    ("Omicron", "\u{39f}"),
    ("Pi", "\u{3a0}"),
    ("Rho", "\u{3a1}"),
    ("Sigma", "\u{3a3}"),
    ("Tau", "\u{3a4}"),
    ("Upsilon", "\u{3a5}"),
    ("Phi", "\u{3a6}"),
    ("Chi", "\u{3a7}"),
    ("Psi", "\u{3a8}"),
    ("Omega", "\u{3a9}"),
    ("ohm", "\u{3a9}"),
    ("alpha", "\u{3b1}"),
    ("beta", "\u{3b2}"),
    ("gamma", "\u{3b3}"),
    ("delta", "\u{3b4}"),
    ("epsilon", "\u{3b5}"),
    ("epsi", "\u{3b5}"),
    ("zeta", "\u{3b6}"),
    ("eta", "\u{3b7}"),
    ("theta", "\u{3b8}"),
    ("iota", "\u{3b9}"),
    ("kappa", "\u{3ba}"),
    ("lambda", "\u{3bb}"),
    ("mu", "\u{3bc}"),
    ("nu", "\u{3bd}"),
    ("xi", "\u{3be}"),
    ("omicron", "\u{3bf}"),
    ("pi", "\u{3c0}"),
    ("rho", "\u{3c1}"),
    ("sigmaf", "\u{3c2}"),
    ("sigmav", "\u{3c2}"),
    ("varsigma", "\u{3c2}"),
    ("sigma", "\u{3c3}"),
    ("tau", "\u{3c4}"),
    ("upsilon", "\u{3c5}"),
    ("upsi", "\u{3c5}"),
    ("phi", "\u{3c6}"),
    ("chi", "\u{3c7}"),
    ("psi", "\u{3c8}"),
    ("omega", "\u{3c9}"),
    ("thetasym", "\u{3d1}"),
    ("thetav", "\u{3d1}"),
    ("vartheta", "\u{3d1}"),
    ("upsih", "\u{3d2}"),
    ("Upsi", "\u{3d2}"),
    ("phiv", "\u{3d5}"),
    ("varphi", "\u{3d5}"),
    ("straightphi", "\u{3d5}"),
    ("piv", "\u{3d6}"),
    ("varpi", "\u{3d6}"),
    ("Gammad", "\u{3dc}"),
    ("gammad", "\u{3dd}"),
    ("digamma", "\u{3dd}"),
    ("kappav", "\u{3f0}"),
    ("varkappa", "\u{3f0}"),
    ("rhov", "\u{3f1}"),
    ("varrho", "\u{3f1}"),
    ("epsiv", "\u{3f5}"),
    ("varepsilon", "\u{3f5}"),
    ("straightepsilon", "\u{3f5}"),
    ("bepsi", "\u{3f6}"),
    ("backepsilon", "\u{3f6}"),
    ("IOcy", "\u{401}"),
    ("DJcy", "\u{402}"),
    ("GJcy", "\u{403}"),
    ("Jukcy", "\u{404}"),
    ("DScy", "\u{405}"),
    ("Iukcy", "\u{406}"),
    ("YIcy", "\u{407}"),
    ("Jsercy", "\u{408}"),
    ("LJcy", "\u{409}"),
    ("NJcy", "\u{40a}"),
    ("TSHcy", "\u{40b}"),
    ("KJcy", "\u{40c}"),
    ("Ubrcy", "\u{40e}"),
    ("DZcy", "\u{40f}"),
    ("Acy", "\u{410}"),
    ("Bcy", "\u{411}"),
    ("Vcy", "\u{412}"),
    ("Gcy", "\u{413}"),
    ("Dcy", "\u{414}"),
    ("IEcy", "\u{415}"),
    ("ZHcy", "\u{416}"),
    ("Zcy", "\u{417}"),
    ("Icy", "\u{418}"),
    ("Jcy", "\u{419}"),
    ("Kcy", "\u{41a}"),
    ("Lcy", "\u{41b}"),
    ("Mcy", "\u{41c}"),
    ("Ncy", "\u{41d}"),
    ("Ocy", "\u{41e}"),
    ("Pcy", "\u{41f}"),
    ("Rcy", "\u{420}"),
    ("Scy", "\u{421}"),
    ("Tcy", "\u{422}"),
    ("Ucy", "\u{423}"),
    ("Fcy", "\u{424}"),
    ("KHcy", "\u{425}"),
    ("TScy", "\u{426}"),
    ("CHcy", "\u{427}"),
    ("SHcy", "\u{428}"),
    ("SHCHcy", "\u{429}"),
    ("HARDcy", "\u{42a}"),
    ("Ycy", "\u{42b}"),
    ("SOFTcy", "\u{42c}"),
    ("Ecy", "\u{42d}"),
    ("YUcy", "\u{42e}"),
    ("YAcy", "\u{42f}"),
    ("acy", "\u{430}"),
    ("bcy", "\u{431}"),
    ("vcy", "\u{432}"),
    ("gcy", "\u{433}"),
    ("dcy", "\u{434}"),
    ("iecy", "\u{435}"),
    ("zhcy", "\u{436}"),
    ("zcy", "\u{437}"),
    ("icy", "\u{438}"),
    ("jcy", "\u{439}"),
    ("kcy", "\u{43a}"),
    ("lcy", "\u{43b}"),
    ("mcy", "\u{43c}"),
    ("ncy", "\u{43d}"),
    ("ocy", "\u{43e}"),
    ("pcy", "\u{43f}"),
    ("rcy", "\u{440}"),
    ("scy", "\u{441}"),
    ("tcy", "\u{442}"),
    ("ucy", "\u{443}"),
    ("fcy", "\u{444}"),
    ("khcy", "\u{445}"),
    ("tscy", "\u{446}"),
    ("chcy", "\u{447}"),
    ("shcy", "\u{448}"),
    ("shchcy", "\u{449}"),
    ("hardcy", "\u{44a}"),
    ("ycy", "\u{44b}"),
    ("softcy", "\u{44c}"),
    ("ecy", "\u{44d}"),
    ("yucy", "\u{44e}"),
    ("yacy", "\u{44f}"),
    ("iocy", "\u{451}"),
    ("djcy", "\u{452}"),
    ("gjcy", "\u{453}"),
    ("jukcy", "\u{454}"),
    ("dscy", "\u{455}"),
    ("iukcy", "\u{456}"),
    ("yicy", "\u{457}"),
    ("jsercy", "\u{458}"),
    ("ljcy", "\u{459}"),
    ("njcy", "\u{45a}"),
    ("tshcy", "\u{45b}"),
    ("kjcy", "\u{45c}"),
    ("ubrcy", "\u{45e}"),
    ("dzcy", "\u{45f}"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("emsp13", "\u{2004}"),
    ("emsp14", "\u{2005}"),
    ("numsp", "\u{2007}"),
    ("puncsp", "\u{2008}"),
    ("thinsp", "\u{2009}"),
    ("ThinSpace", "\u{2009}"),
    ("hairsp", "\u{200a}"),
    ("VeryThinSpace", "\u{200a}"),
    ("ZeroWidthSpace", "\u{200b}"),
    ("NegativeThinSpace", "\u{200b}"),
    ("NegativeThickSpace", "\u{200b}"),
    ("NegativeMediumSpace", "\u{200b}"),
    ("NegativeVeryThinSpace", "\u{200b}"),
    ("zwnj", "\u{200c}"),
    ("zwj", "\u{200d}"),
    ("lrm", "\u{200e}"),
    ("rlm", "\u{200f}"),
    ("dash", "\u{2010}"),
    ("hyphen", "\u{2010}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("horbar", "\u{2015}"),
    ("Vert", "\u{2016}"),
    ("Verbar", "\u{2016}"),
    ("lsquo", "\u{2018}"),
    ("OpenCurlyQuote", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("rsquor", "\u{2019}"),
    ("CloseCurlyQuote", "\u{2019}"),
    ("sbquo", "\u{201a}"),
    ("lsquor", "\u{201a}"),
    ("ldquo", "\u{201c}"),
    ("OpenCurlyDoubleQuote", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("rdquor", "\u{201d}"),
    ("CloseCurlyDoubleQuote", "\u{201d}"),
    ("bdquo", "\u{201e}"),
    ("ldquor", "\u{201e}"),
    ("dagger", "\u{2020}"),
    ("Dagger", "\u{2021}"),
    ("ddagger", "\u{2021}"),
    ("bull", "\u{2022}"),
    ("bullet", "\u{2022}"),
    ("nldr", "\u{2025}"),
    ("hellip", "\u{2026}"),
    ("mldr", "\u{2026}"),
    ("permil", "\u{2030}"),
    ("pertenk", "\u{2031}"),
    ("prime", "\u{2032}"),
    ("Prime", "\u{2033}"),
    ("tprime", "\u{2034}"),
    ("bprime", "\u{2035}"),
    ("backprime", "\u{2035}"),
    ("lsaquo", "\u{2039}"),
    ("rsaquo", "\u{203a}"),
    ("oline", "\u{203e}"),
    ("OverBar", "\u{203e}"),
    ("caret", "\u{2041}"),
    ("hybull", "\u{2043}"),
    ("frasl", "\u{2044}"),
    ("bsemi", "\u{204f}"),
    ("qprime", "\u{2057}"),
    ("MediumSpace", "\u{205f}"),
    ("ThickSpace", "\u{205f}\u{200a}"),
    ("NoBreak", "\u{2060}"),
    ("af", "\u{2061}"),
    ("ApplyFunction", "\u{2061}"),
    ("it", "\u{2062}"),
    ("InvisibleTimes", "\u{2062}"),
    ("ic", "\u{2063}"),
    ("InvisibleComma", "\u{2063}"),
    ("euro", "\u{20ac}"),
    ("tdot", "\u{20db}"),
    ("TripleDot", "\u{20db}"),
    ("DotDot", "\u{20dc}"),
    ("Copf", "\u{2102}"),
    ("complexes", "\u{2102}"),
    ("incare", "\u{2105}"),
    ("gscr", "\u{210a}"),
    ("Hscr", "\u{210b}"),
    ("hamilt", "\u{210b}"),
    ("HilbertSpace", "\u{210b}"),
    ("Hfr", "\u{210c}"),
    ("Poincareplane", "\u{210c}"),
    ("Hopf", "\u{210d}"),
    ("quaternions", "\u{210d}"),
    ("planckh", "\u{210e}"),
    ("hbar", "\u{210f}"),
    ("hslash", "\u{210f}"),
    ("planck", "\u{210f}"),
    ("plankv", "\u{210f}"),
    ("Iscr", "\u{2110}"),
    ("imagline", "\u{2110}"),
    ("image", "\u{2111}"),
    ("Im", "\u{2111}"),
    ("Ifr", "\u{2111}"),
    ("imagpart", "\u{2111}"),
    ("Lscr", "\u{2112}"),
    ("lagran", "\u{2112}"),
    ("Laplacetrf", "\u{2112}"),
    ("ell", "\u{2113}"),
    ("Nopf", "\u{2115}"),
    ("naturals", "\u{2115}"),
    ("numero", "\u{2116}"),
    ("copysr", "\u{2117}"),
    ("weierp", "\u{2118}"),
    ("wp", "\u{2118}"),
    ("Popf", "\u{2119}"),
    ("primes", "\u{2119}"),
    ("Qopf", "\u{211a}"),
    ("rationals", "\u{211a}"),
    ("Rscr", "\u{211b}"),
    ("realine", "\u{211b}"),
    ("real", "\u{211c}"),
    ("Re", "\u{211c}"),
    ("Rfr", "\u{211c}"),
    ("realpart", "\u{211c}"),
    ("Ropf", "\u{211d}"),
    ("reals", "\u{211d}"),
    ("rx", "\u{211e}"),
    ("trade", "\u{2122}"),
    ("TRADE", "\u{2122}"),
    ("Zopf", "\u{2124}"),
    ("integers", "\u{2124}"),
    ("mho", "\u{2127}"),
    ("Zfr", "\u{2128}"),
    ("zeetrf", "\u{2128}"),
    ("iiota", "\u{2129}"),
    ("Bscr", "\u{212c}"),
    ("bernou", "\u{212c}"),
    ("Bernoullis", "\u{212c}"),
    ("Cfr", "\u{212d}"),
    ("Cayleys", "\u{212d}"),
    ("escr", "\u{212f}"),
    ("Escr", "\u{2130}"),
    ("expectation", "\u{2130}"),
    ("Fscr", "\u{2131}"),
    ("Fouriertrf", "\u{2131}"),
    ("Mscr", "\u{2133}"),
    ("phmmat", "\u{2133}"),
    ("Mellintrf", "\u{2133}"),
    ("oscr", "\u{2134}"),
    ("order", "\u{2134}"),
    ("orderof", "\u{2134}"),
    ("alefsym", "\u{2135}"),
    ("aleph", "\u{2135}"),
    ("beth", "\u{2136}"),
    ("gimel", "\u{2137}"),
    ("daleth", "\u{2138}"),
    ("DD", "\u{2145}"),
    ("CapitalDifferentialD", "\u{2145}"),
    ("dd", "\u{2146}"),
    ("DifferentialD", "\u{2146}"),
    ("ee", "\u{2147}"),
    ("exponentiale", "\u{2147}"),
    ("ExponentialE", "\u{2147}"),
    ("ii", "\u{2148}"),
    ("ImaginaryI", "\u{2148}"),
    ("frac13", "\u{2153}"),
    ("frac23", "\u{2154}"),
    ("frac15", "\u{2155}"),
    ("frac25", "\u{2156}"),
    ("frac35", "\u{2157}"),
    ("frac45", "\u{2158}"),
    ("frac16", "\u{2159}"),
    ("frac56", "\u{215a}"),
    ("frac18", "\u{215b}"),
    ("frac38", "\u{215c}"),
    ("frac58", "\u{215d}"),
    ("frac78", "\u{215e}"),
    ("larr", "\u{2190}"),
    ("slarr", "\u{2190}"),
    ("leftarrow", "\u{2190}"),
    ("LeftArrow", "\u{2190}"),
    ("ShortLeftArrow", "\u{2190}"),
    ("uarr", "\u{2191}"),
    ("uparrow", "\u{2191}"),
    ("UpArrow", "\u{2191}"),
    ("ShortUpArrow", "\u{2191}"),
    ("rarr", "\u{2192}"),
    ("srarr", "\u{2192}"),
    ("rightarrow", "\u{2192}"),
    ("RightArrow", "\u{2192}"),
    ("ShortRightArrow", "\u{2192}"),
    ("darr", "\u{2193}"),
    ("downarrow", "\u{2193}"),
    ("DownArrow", "\u{2193}"),
    ("ShortDownArrow", "\u{2193}"),
    ("harr", "\u{2194}"),
    ("leftrightarrow", "\u{2194}"),
    ("LeftRightArrow", "\u{2194}"),
    ("varr", "\u{2195}"),
    ("updownarrow", "\u{2195}"),
    ("UpDownArrow", "\u{2195}"),
    ("nwarr", "\u{2196}"),
    ("nwarrow", "\u{2196}"),
    ("UpperLeftArrow", "\u{2196}"),
    ("nearr", "\u{2197}"),
    ("nearrow", "\u{2197}"),
    ("UpperRightArrow", "\u{2197}"),
    ("searr", "\u{2198}"),
    ("searrow", "\u{2198}"),
    ("LowerRightArrow", "\u{2198}"),
    ("swarr", "\u{2199}"),
    ("swarrow", "\u{2199}"),
    ("LowerLeftArrow", "\u{2199}"),
    ("nlarr", "\u{219a}"),
    ("nleftarrow", "\u{219a}"),
    ("nrarr", "\u{219b}"),
    ("nrightarrow", "\u{219b}"),
    ("rarrw", "\u{219d}"),
    ("rightsquigarrow", "\u{219d}"),
    ("nrarrw", "\u{219d}\u{338}"),
    ("Larr", "\u{219e}"),
    ("twoheadleftarrow", "\u{219e}"),
    ("Uarr", "\u{219f}"),
    ("Rarr", "\u{21a0}"),
    ("twoheadrightarrow", "\u{21a0}"),
    ("Darr", "\u{21a1}"),
    ("larrtl", "\u{21a2}"),
    ("leftarrowtail", "\u{21a2}"),
    ("rarrtl", "\u{21a3}"),
    ("rightarrowtail", "\u{21a3}"),
    ("mapstoleft", "\u{21a4}"),
    ("LeftTeeArrow", "\u{21a4}"),
    ("mapstoup", "\u{21a5}"),
    ("UpTeeArrow", "\u{21a5}"),
    ("map", "\u{21a6}"),
    ("mapsto", "\u{21a6}"),
    ("RightTeeArrow", "\u{21a6}"),
    ("mapstodown", "\u{21a7}"),
    ("DownTeeArrow", "\u{21a7}"),
    ("larrhk", "\u{21a9}"),
    ("hookleftarrow", "\u{21a9}"),
    ("rarrhk", "\u{21aa}"),
    ("hookrightarrow", "\u{21aa}"),
    ("larrlp", "\u{21ab}"),
    ("looparrowleft", "\u{21ab}"),
    ("rarrlp", "\u{21ac}"),
    ("looparrowright", "\u{21ac}"),
    ("harrw", "\u{21ad}"),
    ("leftrightsquigarrow", "\u{21ad}"),
    ("nharr", "\u{21ae}"),
    ("nleftrightarrow", "\u{21ae}"),
    ("lsh", "\u{21b0}"),
    ("Lsh", "\u{21b0}"),
    ("rsh", "\u{21b1}"),
    ("Rsh", "\u{21b1}"),
    ("ldsh", "\u{21b2}"),
    ("rdsh", "\u{21b3}"),
    ("crarr", "\u{21b5}"),
    ("cularr", "\u{21b6}"),
    ("curvearrowleft", "\u{21b6}"),
    ("curarr", "\u{21b7}"),
    ("curvearrowright", "\u{21b7}"),
    ("olarr", "\u{21ba}"),
    ("circlearrowleft", "\u{21ba}"),
    ("orarr", "\u{21bb}"),
    ("circlearrowright", "\u{21bb}"),
    ("lharu", "\u{21bc}"),
    ("LeftVector", "\u{21bc}"),
    ("leftharpoonup", "\u{21bc}"),
    ("lhard", "\u{21bd}"),
    ("DownLeftVector", "\u{21bd}"),
    ("leftharpoondown", "\u{21bd}"),
    ("uharr", "\u{21be}"),
    ("RightUpVector", "\u{21be}"),
    ("upharpoonright", "\u{21be}"),
    ("uharl", "\u{21bf}"),
    ("LeftUpVector", "\u{21bf}"),
    ("upharpoonleft", "\u{21bf}"),
    ("rharu", "\u{21c0}"),
    ("RightVector", "\u{21c0}"),
    ("rightharpoonup", "\u{21c0}"),
    ("rhard", "\u{21c1}"),
    ("DownRightVector", "\u{21c1}"),
    ("rightharpoondown", "\u{21c1}"),
    ("dharr", "\u{21c2}"),
    ("RightDownVector", "\u{21c2}"),
    ("downharpoonright", "\u{21c2}"),
    ("dharl", "\u{21c3}"),
    ("LeftDownVector", "\u{21c3}"),
    ("downharpoonleft", "\u{21c3}"),
    ("rlarr", "\u{21c4}"),
    ("rightleftarrows", "\u{21c4}"),
    ("RightArrowLeftArrow", "\u{21c4}"),
    ("udarr", "\u{21c5}"),
    ("UpArrowDownArrow", "\u{21c5}"),
    ("lrarr", "\u{21c6}"),
    ("leftrightarrows", "\u{21c6}"),
    ("LeftArrowRightArrow", "\u{21c6}"),
    ("llarr", "\u{21c7}"),
    ("leftleftarrows", "\u{21c7}"),
    ("uuarr", "\u{21c8}"),
    ("upuparrows", "\u{21c8}"),
    ("rrarr", "\u{21c9}"),
    ("rightrightarrows", "\u{21c9}"),
    ("ddarr", "\u{21ca}"),
    ("downdownarrows", "\u{21ca}"),
    ("lrhar", "\u{21cb}"),
    ("leftrightharpoons", "\u{21cb}"),
    ("ReverseEquilibrium", "\u{21cb}"),
    ("rlhar", "\u{21cc}"),
    ("Equilibrium", "\u{21cc}"),
    ("rightleftharpoons", "\u{21cc}"),
    ("nlArr", "\u{21cd}"),
    ("nLeftarrow", "\u{21cd}"),
    ("nhArr", "\u{21ce}"),
    ("nLeftrightarrow", "\u{21ce}"),
    ("nrArr", "\u{21cf}"),
    ("nRightarrow", "\u{21cf}"),
    ("lArr", "\u{21d0}"),
    ("Leftarrow", "\u{21d0}"),
    ("DoubleLeftArrow", "\u{21d0}"),
    ("uArr", "\u{21d1}"),
    ("Uparrow", "\u{21d1}"),
    ("DoubleUpArrow", "\u{21d1}"),
    ("rArr", "\u{21d2}"),
    ("Implies", "\u{21d2}"),
    ("Rightarrow", "\u{21d2}"),
    ("DoubleRightArrow", "\u{21d2}"),
    ("dArr", "\u{21d3}"),
    ("Downarrow", "\u{21d3}"),
    ("DoubleDownArrow", "\u{21d3}"),
    ("hArr", "\u{21d4}"),
    ("iff", "\u{21d4}"),
    ("Leftrightarrow", "\u{21d4}"),
    ("DoubleLeftRightArrow", "\u{21d4}"),
    ("vArr", "\u{21d5}"),
    ("Updownarrow", "\u{21d5}"),
    ("DoubleUpDownArrow", "\u{21d5}"),
    ("nwArr", "\u{21d6}"),
    ("neArr", "\u{21d7}"),
    ("seArr", "\u{21d8}"),
    ("swArr", "\u{21d9}"),
    ("lAarr", "\u{21da}"),
    ("Lleftarrow", "\u{21da}"),
    ("rAarr", "\u{21db}"),
    ("Rrightarrow", "\u{21db}"),
    ("zigrarr", "\u{21dd}"),
    ("larrb", "\u{21e4}"),
    ("LeftArrowBar", "\u{21e4}"),
    ("rarrb", "\u{21e5}"),
    ("RightArrowBar", "\u{21e5}"),
    ("duarr", "\u{21f5}"),
    ("DownArrowUpArrow", "\u{21f5}"),
    ("loarr", "\u{21fd}"),
    ("roarr", "\u{21fe}"),
    ("hoarr", "\u{21ff}"),
    ("forall", "\u{2200}"),
    ("ForAll", "\u{2200}"),
    ("comp", "\u{2201}"),
    ("complement", "\u{2201}"),
    ("part", "\u{2202}"),
    ("PartialD", "\u{2202}"),
    ("npart", "\u{2202}\u{338}"),
    ("exist", "\u{2203}"),
    ("Exists", "\u{2203}"),
    ("nexist", "\u{2204}"),
    ("nexists", "\u{2204}"),
    ("NotExists", "\u{2204}"),
    ("empty", "\u{2205}"),
    ("emptyv", "\u{2205}"),
    ("emptyset", "\u{2205}"),
    ("varnothing", "\u{2205}"),
    ("nabla", "\u{2207}"),
    ("Del", "\u{2207}"),
    ("isin", "\u{2208}"),
    ("in", "\u{2208}"),
    ("isinv", "\u{2208}"),
    ("Element", "\u{2208}"),
    ("notin", "\u{2209}"),
    ("notinva", "\u{2209}"),
    ("NotElement", "\u{2209}"),
    ("ni", "\u{220b}"),
    ("niv", "\u{220b}"),
    ("SuchThat", "\u{220b}"),
    ("ReverseElement", "\u{220b}"),
    ("notni", "\u{220c}"),
    ("notniva", "\u{220c}"),
    ("NotReverseElement", "\u{220c}"),
    ("prod", "\u{220f}"),
    ("Product", "\u{220f}"),
    ("coprod", "\u{2210}"),
    ("Coproduct", "\u{2210}"),
    ("sum", "\u{2211}"),
    ("Sum", "\u{2211}"),
    ("minus", "\u{2212}"),
    ("mp", "\u{2213}"),
    ("mnplus", "\u{2213}"),
    ("MinusPlus", "\u{2213}"),
    ("plusdo", "\u{2214}"),
    ("dotplus", "\u{2214}"),
    ("setmn", "\u{2216}"),
    ("ssetmn", "\u{2216}"),
    ("setminus", "\u{2216}"),
    ("Backslash", "\u{2216}"),
    ("smallsetminus", "\u{2216}"),
    ("lowast", "\u{2217}"),
    ("compfn", "\u{2218}"),
    ("SmallCircle", "\u{2218}"),
    ("radic", "\u{221a}"),
    ("Sqrt", "\u{221a}"),
    ("prop", "\u{221d}"),
    ("vprop", "\u{221d}"),
    ("propto", "\u{221d}"),
    ("varpropto", "\u{221d}"),
    ("Proportional", "\u{221d}"),
    ("infin", "\u{221e}"),
    ("angrt", "\u{221f}"),
    ("ang", "\u{2220}"),
    ("angle", "\u{2220}"),
    ("nang", "\u{2220}\u{20d2}"),
    ("angmsd", "\u{2221}"),
    ("measuredangle", "\u{2221}"),
    ("angsph", "\u{2222}"),
    ("mid", "\u{2223}"),
    ("smid", "\u{2223}"),
    ("shortmid", "\u{2223}"),
    ("VerticalBar", "\u{2223}"),
    ("nmid", "\u{2224}"),
    ("nsmid", "\u{2224}"),
    ("nshortmid", "\u{2224}"),
    ("NotVerticalBar", "\u{2224}"),
    ("par", "\u{2225}"),
    ("spar", "\u{2225}"),
    ("parallel", "\u{2225}"),
    ("shortparallel", "\u{2225}"),
    ("DoubleVerticalBar", "\u{2225}"),
    ("npar", "\u{2226}"),
    ("nspar", "\u{2226}"),
    ("nparallel", "\u{2226}"),
    ("nshortparallel", "\u{2226}"),
    ("NotDoubleVerticalBar", "\u{2226}"),
    ("and", "\u{2227}"),
    ("wedge", "\u{2227}"),
    ("or", "\u{2228}"),
    ("vee", "\u{2228}"),
    ("cap", "\u{2229}"),
    ("caps", "\u{2229}\u{fe00}"),
    ("cup", "\u{222a}"),
    ("cups", "\u{222a}\u{fe00}"),
    ("int", "\u{222b}"),
    ("Integral", "\u{222b}"),
    ("Int", "\u{222c}"),
    ("tint", "\u{222d}"),
    ("iiint", "\u{222d}"),
    ("oint", "\u{222e}"),
    ("conint", "\u{222e}"),
    ("ContourIntegral", "\u{222e}"),
    ("Conint", "\u{222f}"),
    ("DoubleContourIntegral", "\u{222f}"),
    ("Cconint", "\u{2230}"),
    ("cwint", "\u{2231}"),
    ("cwconint", "\u{2232}"),
    ("ClockwiseContourIntegral", "\u{2232}"),
    ("awconint", "\u{2233}"),
    ("CounterClockwiseContourIntegral", "\u{2233}"),
    ("there4", "\u{2234}"),
    ("therefore", "\u{2234}"),
    ("Therefore", "\u{2234}"),
    ("becaus", "\u{2235}"),
    ("because", "\u{2235}"),
    ("Because", "\u{2235}"),
    ("ratio", "\u{2236}"),
    ("Colon", "\u{2237}"),
    ("Proportion", "\u{2237}"),
    ("minusd", "\u{2238}"),
    ("dotminus", "\u{2238}"),
    ("mDDot", "\u{223a}"),
    ("homtht", "\u{223b}"),
    ("sim", "\u{223c}"),
    ("Tilde", "\u{223c}"),
    ("thksim", "\u{223c}"),
    ("thicksim", "\u{223c}"),
    ("nvsim", "\u{223c}\u{20d2}"),
    ("bsim", "\u{223d}"),
    ("backsim", "\u{223d}"),
    ("race", "\u{223d}\u{331}"),
    ("ac", "\u{223e}"),
    ("mstpos", "\u{223e}"),
    ("acE", "\u{223e}\u{333}"),
    ("acd", "\u{223f}"),
    ("wr", "\u{2240}"),
    ("wreath", "\u{2240}"),
    ("VerticalTilde", "\u{2240}"),
    ("nsim", "\u{2241}"),
    ("NotTilde", "\u{2241}"),
    ("esim", "\u{2242}"),
    ("eqsim", "\u{2242}"),
    ("EqualTilde", "\u{2242}"),
    ("nesim", "\u{2242}\u{338}"),
    ("NotEqualTilde", "\u{2242}\u{338}"),
    ("sime", "\u{2243}"),
    ("simeq", "\u{2243}"),
    ("TildeEqual", "\u{2243}"),
    ("nsime", "\u{2244}"),
    ("nsimeq", "\u{2244}"),
    ("NotTildeEqual", "\u{2244}"),
    ("cong", "\u{2245}"),
    ("TildeFullEqual", "\u{2245}"),
    ("simne", "\u{2246}"),
    ("ncong", "\u{2247}"),
    ("NotTildeFullEqual", "\u{2247}"),
    ("asymp", "\u{2248}"),
    ("ap", "\u{2248}"),
    ("thkap", "\u{2248}"),
    ("approx", "\u{2248}"),
    ("TildeTilde", "\u{2248}"),
    ("thickapprox", "\u{2248}"),
    ("nap", "\u{2249}"),
    ("napprox", "\u{2249}"),
    ("NotTildeTilde", "\u{2249}"),
    ("ape", "\u{224a}"),
    ("approxeq", "\u{224a}"),
    ("apid", "\u{224b}"),
    ("napid", "\u{224b}\u{338}"),
    ("bcong", "\u{224c}"),
    ("backcong", "\u{224c}"),
    ("CupCap", "\u{224d}"),
    ("asympeq", "\u{224d}"),
    ("nvap", "\u{224d}\u{20d2}"),
    ("bump", "\u{224e}"),
    ("Bumpeq", "\u{224e}"),
    ("HumpDownHump", "\u{224e}"),
    ("nbump", "\u{224e}\u{338}"),
    ("NotHumpDownHump", "\u{224e}\u{338}"),
    ("bumpe", "\u{224f}"),
    ("bumpeq", "\u{224f}"),
    ("HumpEqual", "\u{224f}"),
    ("nbumpe", "\u{224f}\u{338}"),
    ("NotHumpEqual", "\u{224f}\u{338}"),
    ("doteq", "\u{2250}"),
    ("esdot", "\u{2250}"),
    ("DotEqual", "\u{2250}"),
    ("nedot", "\u{2250}\u{338}"),
    ("eDot", "\u{2251}"),
    ("doteqdot", "\u{2251}"),
    ("efDot", "\u{2252}"),
    ("fallingdotseq", "\u{2252}"),
    ("erDot", "\u{2253}"),
    ("risingdotseq", "\u{2253}"),
    ("colone", "\u{2254}"),
    ("Assign", "\u{2254}"),
    ("coloneq", "\u{2254}"),
    ("ecolon", "\u{2255}"),
    ("eqcolon", "\u{2255}"),
    ("ecir", "\u{2256}"),
    ("eqcirc", "\u{2256}"),
    ("cire", "\u{2257}"),
    ("circeq", "\u{2257}"),
    ("wedgeq", "\u{2259}"),
    ("veeeq", "\u{225a}"),
    ("trie", "\u{225c}"),
    ("triangleq", "\u{225c}"),
    ("equest", "\u{225f}"),
    ("questeq", "\u{225f}"),
    ("ne", "\u{2260}"),
    ("NotEqual", "\u{2260}"),
    ("equiv", "\u{2261}"),
    ("Congruent", "\u{2261}"),
    ("bnequiv", "\u{2261}\u{20e5}"),
    ("nequiv", "\u{2262}"),
    ("NotCongruent", "\u{2262}"),
    ("le", "\u{2264}"),
    ("leq", "\u{2264}"),
    ("nvle", "\u{2264}\u{20d2}"),
    ("ge", "\u{2265}"),
    ("geq", "\u{2265}"),
    ("GreaterEqual", "\u{2265}"),
    ("nvge", "\u{2265}\u{20d2}"),
    ("lE", "\u{2266}"),
    ("leqq", "\u{2266}"),
    ("LessFullEqual", "\u{2266}"),
    ("nlE", "\u{2266}\u{338}"),
    ("nleqq", "\u{2266}\u{338}"),
    ("gE", "\u{2267}"),
    ("geqq", "\u{2267}"),
    ("GreaterFullEqual", "\u{2267}"),
    ("ngE", "\u{2267}\u{338}"),
    ("ngeqq", "\u{2267}\u{338}"),
    ("NotGreaterFullEqual", "\u{2267}\u{338}"),
    ("lnE", "\u{2268}"),
    ("lneqq", "\u{2268}"),
    ("lvnE", "\u{2268}\u{fe00}"),
    ("lvertneqq", "\u{2268}\u{fe00}"),
    ("gnE", "\u{2269}"),
    ("gneqq", "\u{2269}"),
    ("gvnE", "\u{2269}\u{fe00}"),
    ("gvertneqq", "\u{2269}\u{fe00}"),
    ("ll", "\u{226a}"),
    ("Lt", "\u{226a}"),
    ("NestedLessLess", "\u{226a}"),
    ("nLtv", "\u{226a}\u{338}"),
    ("NotLessLess", "\u{226a}\u{338}"),
    ("nLt", "\u{226a}\u{20d2}"),
    ("gg", "\u{226b}"),
    ("Gt", "\u{226b}"),
    ("NestedGreaterGreater", "\u{226b}"),
    ("nGtv", "\u{226b}\u{338}"),
    ("NotGreaterGreater", "\u{226b}\u{338}"),
    ("nGt", "\u{226b}\u{20d2}"),
    ("twixt", "\u{226c}"),
    ("between", "\u{226c}"),
    ("NotCupCap", "\u{226d}"),
    ("nlt", "\u{226e}"),
    ("nless", "\u{226e}"),
    ("NotLess", "\u{226e}"),
    ("ngt", "\u{226f}"),
    ("ngtr", "\u{226f}"),
    ("NotGreater", "\u{226f}"),
    ("nle", "\u{2270}"),
    ("nleq", "\u{2270}"),
    ("NotLessEqual", "\u{2270}"),
    ("nge", "\u{2271}"),
    ("ngeq", "\u{2271}"),
    ("NotGreaterEqual", "\u{2271}"),
    ("lsim", "\u{2272}"),
    ("lesssim", "\u{2272}"),
    ("LessTilde", "\u{2272}"),
    ("gsim", "\u{2273}"),
    ("gtrsim", "\u{2273}"),
    ("GreaterTilde", "\u{2273}"),
    ("nlsim", "\u{2274}"),
    ("NotLessTilde", "\u{2274}"),
    ("ngsim", "\u{2275}"),
    ("NotGreaterTilde", "\u{2275}"),
    ("lg", "\u{2276}"),
    ("lessgtr", "\u{2276}"),
    ("LessGreater", "\u{2276}"),
    ("gl", "\u{2277}"),
    ("gtrless", "\u{2277}"),
    ("GreaterLess", "\u{2277}"),
    ("ntlg", "\u{2278}"),
    ("NotLessGreater", "\u{2278}"),
    ("ntgl", "\u{2279}"),
    ("NotGreaterLess", "\u{2279}"),
    ("pr", "\u{227a}"),
    ("prec", "\u{227a}"),
    ("Precedes", "\u{227a}"),
    ("sc", "\u{227b}"),
    ("succ", "\u{227b}"),
    ("Succeeds", "\u{227b}"),
    ("prcue", "\u{227c}"),
    ("preccurlyeq", "\u{227c}"),
    ("PrecedesSlantEqual", "\u{227c}"),
    ("sccue", "\u{227d}"),
    ("succcurlyeq", "\u{227d}"),
    ("SucceedsSlantEqual", "\u{227d}"),
    ("prsim", "\u{227e}"),
    ("precsim", "\u{227e}"),
    ("PrecedesTilde", "\u{227e}"),
    ("scsim", "\u{227f}"),
    ("succsim", "\u{227f}"),
    ("SucceedsTilde", "\u{227f}"),
    ("NotSucceedsTilde", "\u{227f}\u{338}"),
    ("npr", "\u{2280}"),
    ("nprec", "\u{2280}"),
    ("NotPrecedes", "\u{2280}"),
    ("nsc", "\u{2281}"),
    ("nsucc", "\u{2281}"),
    ("NotSucceeds", "\u{2281}"),
    ("sub", "\u{2282}"),
    ("subset", "\u{2282}"),
    ("vnsub", "\u{2282}\u{20d2}"),
    ("nsubset", "\u{2282}\u{20d2}"),
    ("NotSubset", "\u{2282}\u{20d2}"),
    ("sup", "\u{2283}"),
    ("supset", "\u{2283}"),
    ("Superset", "\u{2283}"),
    ("vnsup", "\u{2283}\u{20d2}"),
    ("nsupset", "\u{2283}\u{20d2}"),
    ("NotSuperset", "\u{2283}\u{20d2}"),
    ("nsub", "\u{2284}"),
    ("nsup", "\u{2285}"),
    ("sube", "\u{2286}"),
    ("subseteq", "\u{2286}"),
    ("SubsetEqual", "\u{2286}"),
    ("supe", "\u{2287}"),
    ("supseteq", "\u{2287}"),
    ("SupersetEqual", "\u{2287}"),
    ("nsube", "\u{2288}"),
    ("nsubseteq", "\u{2288}"),
    ("NotSubsetEqual", "\u{2288}"),
    ("nsupe", "\u{2289}"),
    ("nsupseteq", "\u{2289}"),
    ("NotSupersetEqual", "\u{2289}"),
    ("subne", "\u{228a}"),
    ("subsetneq", "\u{228a}"),
    ("vsubne", "\u{228a}\u{fe00}"),
    ("varsubsetneq", "\u{228a}\u{fe00}"),
    ("supne", "\u{228b}"),
    ("supsetneq", "\u{228b}"),
    ("vsupne", "\u{228b}\u{fe00}"),
    ("varsupsetneq", "\u{228b}\u{fe00}"),
    ("cupdot", "\u{228d}"),
    ("uplus", "\u{228e}"),
    ("UnionPlus", "\u{228e}"),
    ("sqsub", "\u{228f}"),
    ("sqsubset", "\u{228f}"),
    ("SquareSubset", "\u{228f}"),
    ("NotSquareSubset", "\u{228f}\u{338}"),
    ("sqsup", "\u{2290}"),
    ("sqsupset", "\u{2290}"),
    ("SquareSuperset", "\u{2290}"),
    ("NotSquareSuperset", "\u{2290}\u{338}"),
    ("sqsube", "\u{2291}"),
    ("sqsubseteq", "\u{2291}"),
    ("SquareSubsetEqual", "\u{2291}"),
    ("sqsupe", "\u{2292}"),
    ("sqsupseteq", "\u{2292}"),
    ("SquareSupersetEqual", "\u{2292}"),
    ("sqcap", "\u{2293}"),
    ("SquareIntersection", "\u{2293}"),
    ("sqcaps", "\u{2293}\u{fe00}"),
    ("sqcup", "\u{2294}"),
    ("SquareUnion", "\u{2294}"),
    ("sqcups", "\u{2294}\u{fe00}"),
    ("oplus", "\u{2295}"),
    ("CirclePlus", "\u{2295}"),
    ("ominus", "\u{2296}"),
    ("CircleMinus", "\u{2296}"),
    ("otimes", "\u{2297}"),
    ("CircleTimes", "\u{2297}"),
    ("osol", "\u{2298}"),
    ("odot", "\u{2299}"),
    ("CircleDot", "\u{2299}"),
    ("ocir", "\u{229a}"),
    ("circledcirc", "\u{229a}"),
    ("oast", "\u{229b}"),
    ("circledast", "\u{229b}"),
    ("odash", "\u{229d}"),
    ("circleddash", "\u{229d}"),
    ("plusb", "\u{229e}"),
    ("boxplus", "\u{229e}"),
    ("minusb", "\u{229f}"),
    ("boxminus", "\u{229f}"),
    ("timesb", "\u{22a0}"),
    ("boxtimes", "\u{22a0}"),
    ("sdotb", "\u{22a1}"),
    ("dotsquare", "\u{22a1}"),
    ("vdash", "\u{22a2}"),
    ("RightTee", "\u{22a2}"),
    ("dashv", "\u{22a3}"),
    ("LeftTee", "\u{22a3}"),
    ("top", "\u{22a4}"),
    ("DownTee", "\u{22a4}"),
    ("perp", "\u{22a5}"),
    ("bot", "\u{22a5}"),
    ("UpTee", "\u{22a5}"),
    ("bottom", "\u{22a5}"),
    ("models", "\u{22a7}"),
    ("vDash", "\u{22a8}"),
    ("DoubleRightTee", "\u{22a8}"),
    ("Vdash", "\u{22a9}"),
    ("Vvdash", "\u{22aa}"),
    ("VDash", "\u{22ab}"),
    ("nvdash", "\u{22ac}"),
    ("nvDash", "\u{22ad}"),
    ("nVdash", "\u{22ae}"),
    ("nVDash", "\u{22af}"),
    ("prurel", "\u{22b0}"),
    ("vltri", "\u{22b2}"),
    ("LeftTriangle", "\u{22b2}"),
    ("vartriangleleft", "\u{22b2}"),
    ("vrtri", "\u{22b3}"),
    ("RightTriangle", "\u{22b3}"),
    ("vartriangleright", "\u{22b3}"),
    ("ltrie", "\u{22b4}"),
    ("trianglelefteq", "\u{22b4}"),
    ("LeftTriangleEqual", "\u{22b4}"),
    ("nvltrie", "\u{22b4}\u{20d2}"),
    ("rtrie", "\u{22b5}"),
    ("trianglerighteq", "\u{22b5}"),
    ("RightTriangleEqual", "\u{22b5}"),
    ("nvrtrie", "\u{22b5}\u{20d2}"),
    ("origof", "\u{22b6}"),
    ("imof", "\u{22b7}"),
    ("mumap", "\u{22b8}"),
    ("multimap", "\u{22b8}"),
    ("hercon", "\u{22b9}"),
    ("intcal", "\u{22ba}"),
    ("intercal", "\u{22ba}"),
    ("veebar", "\u{22bb}"),
    ("barvee", "\u{22bd}"),
    ("angrtvb", "\u{22be}"),
    ("lrtri", "\u{22bf}"),
    ("Wedge", "\u{22c0}"),
    ("xwedge", "\u{22c0}"),
    ("bigwedge", "\u{22c0}"),
    ("Vee", "\u{22c1}"),
    ("xvee", "\u{22c1}"),
    ("bigvee", "\u{22c1}"),
    ("xcap", "\u{22c2}"),
    ("bigcap", "\u{22c2}"),
    ("Intersection", "\u{22c2}"),
    ("xcup", "\u{22c3}"),
    ("Union", "\u{22c3}"),
    ("bigcup", "\u{22c3}"),
    ("diam", "\u{22c4}"),
    ("diamond", "\u{22c4}"),
    ("Diamond", "\u{22c4}"),
    ("sdot", "\u{22c5}"),
    ("Star", "\u{22c6}"),
    ("sstarf", "\u{22c6}"),
    ("divonx", "\u{22c7}"),
    ("divideontimes", "\u{22c7}"),
    ("bowtie", "\u{22c8}"),
    ("ltimes", "\u{22c9}"),
    ("rtimes", "\u{22ca}"),
    ("lthree", "\u{22cb}"),
    ("leftthreetimes", "\u{22cb}"),
    ("rthree", "\u{22cc}"),
    ("rightthreetimes", "\u{22cc}"),
    ("bsime", "\u{22cd}"),
    ("backsimeq", "\u{22cd}"),
    ("cuvee", "\u{22ce}"),
    ("curlyvee", "\u{22ce}"),
    ("cuwed", "\u{22cf}"),
    ("curlywedge", "\u{22cf}"),
    ("Sub", "\u{22d0}"),
    ("Subset", "\u{22d0}"),
    ("Sup", "\u{22d1}"),
    ("Supset", "\u{22d1}"),
    ("Cap", "\u{22d2}"),
    ("Cup", "\u{22d3}"),
    ("fork", "\u{22d4}"),
    ("pitchfork", "\u{22d4}"),
    ("epar", "\u{22d5}"),
    ("ltdot", "\u{22d6}"),
    ("lessdot", "\u{22d6}"),
    ("gtdot", "\u{22d7}"),
    ("gtrdot", "\u{22d7}"),
    ("Ll", "\u{22d8}"),
    ("nLl", "\u{22d8}\u{338}"),
    ("Gg", "\u{22d9}"),
    ("ggg", "\u{22d9}"),
    ("nGg", "\u{22d9}\u{338}"),
    ("leg", "\u{22da}"),
    ("lesseqgtr", "\u{22da}"),
    ("LessEqualGreater", "\u{22da}"),
    ("lesg", "\u{22da}\u{fe00}"),
    ("gel", "\u{22db}"),
    ("gtreqless", "\u{22db}"),
    ("GreaterEqualLess", "\u{22db}"),
    ("gesl", "\u{22db}\u{fe00}"),
    ("cuepr", "\u{22de}"),
    ("curlyeqprec", "\u{22de}"),
    ("cuesc", "\u{22df}"),
    ("curlyeqsucc", "\u{22df}"),
    ("nprcue", "\u{22e0}"),
    ("NotPrecedesSlantEqual", "\u{22e0}"),
    ("nsccue", "\u{22e1}"),
    ("NotSucceedsSlantEqual", "\u{22e1}"),
    ("nsqsube", "\u{22e2}"),
    ("NotSquareSubsetEqual", "\u{22e2}"),
    ("nsqsupe", "\u{22e3}"),
    ("NotSquareSupersetEqual", "\u{22e3}"),
    ("lnsim", "\u{22e6}"),
    ("gnsim", "\u{22e7}"),
    ("prnsim", "\u{22e8}"),
    ("precnsim", "\u{22e8}"),
    ("scnsim", "\u{22e9}"),
    ("succnsim", "\u{22e9}"),
    ("nltri", "\u{22ea}"),
    ("ntriangleleft", "\u{22ea}"),
    ("NotLeftTriangle", "\u{22ea}"),
    ("nrtri", "\u{22eb}"),
    ("ntriangleright", "\u{22eb}"),
    ("NotRightTriangle", "\u{22eb}"),
    ("nltrie", "\u{22ec}"),
    ("ntrianglelefteq", "\u{22ec}"),
    ("NotLeftTriangleEqual", "\u{22ec}"),
    ("nrtrie", "\u{22ed}"),
    ("ntrianglerighteq", "\u{22ed}"),
    ("NotRightTriangleEqual", "\u{22ed}"),
    ("vellip", "\u{22ee}"),
    ("ctdot", "\u{22ef}"),
    ("utdot", "\u{22f0}"),
    ("dtdot", "\u{22f1}"),
    ("disin", "\u{22f2}"),
    ("isinsv", "\u{22f3}"),
    ("isins", "\u{22f4}"),
    ("isindot", "\u{22f5}"),
    ("notindot", "\u{22f5}\u{338}"),
    ("notinvc", "\u{22f6}"),
    ("notinvb", "\u{22f7}"),
    ("isinE", "\u{22f9}"),
    ("notinE", "\u{22f9}\u{338}"),
    ("nisd", "\u{22fa}"),
    ("xnis", "\u{22fb}"),
    ("nis", "\u{22fc}"),
    ("notnivc", "\u{22fd}"),
    ("notnivb", "\u{22fe}"),
    ("barwed", "\u{2305}"),
    ("barwedge", "\u{2305}"),
    ("Barwed", "\u{2306}"),
    ("doublebarwedge", "\u{2306}"),
    ("lceil", "\u{2308}"),
    ("LeftCeiling", "\u{2308}"),
    ("rceil", "\u{2309}"),
    ("RightCeiling", "\u{2309}"),
    ("lfloor", "\u{230a}"),
    ("LeftFloor", "\u{230a}"),
    ("rfloor", "\u{230b}"),
    ("RightFloor", "\u{230b}"),
    ("drcrop", "\u{230c}"),
    ("dlcrop", "\u{230d}"),
    ("urcrop", "\u{230e}"),
    ("ulcrop", "\u{230f}"),
    ("bnot", "\u{2310}"),
    ("profline", "\u{2312}"),
    ("profsurf", "\u{2313}"),
    ("telrec", "\u{2315}"),
    ("target", "\u{2316}"),
    ("ulcorn", "\u{231c}"),
    ("ulcorner", "\u{231c}"),
    ("urcorn", "\u{231d}"),
    ("urcorner", "\u{231d}"),
    ("dlcorn", "\u{231e}"),
    ("llcorner", "\u{231e}"),
    ("drcorn", "\u{231f}"),
    ("lrcorner", "\u{231f}"),
    ("frown", "\u{2322}"),
    ("sfrown", "\u{2322}"),
    ("smile", "\u{2323}"),
    ("ssmile", "\u{2323}"),
    ("cylcty", "\u{232d}"),
    ("profalar", "\u{232e}"),
    ("topbot", "\u{2336}"),
    ("ovbar", "\u{233d}"),
    ("solbar", "\u{233f}"),
    ("angzarr", "\u{237c}"),
    ("lmoust", "\u{23b0}"),
    ("lmoustache", "\u{23b0}"),
    ("rmoust", "\u{23b1}"),
    ("rmoustache", "\u{23b1}"),
    ("tbrk", "\u{23b4}"),
    ("OverBracket", "\u{23b4}"),
    ("bbrk", "\u{23b5}"),
    ("UnderBracket", "\u{23b5}"),
    ("bbrktbrk", "\u{23b6}"),
    ("OverParenthesis", "\u{23dc}"),
    ("UnderParenthesis", "\u{23dd}"),
    ("OverBrace", "\u{23de}"),
    ("UnderBrace", "\u{23df}"),
    ("trpezium", "\u{23e2}"),
    ("elinters", "\u{23e7}"),
    ("blank", "\u{2423}"),
    ("oS", "\u{24c8}"),
    ("circledS", "\u{24c8}"),
    ("boxh", "\u{2500}"),
    ("HorizontalLine", "\u{2500}"),
    ("boxv", "\u{2502}"),
    ("boxdr", "\u{250c}"),
    ("boxdl", "\u{2510}"),
    ("boxur", "\u{2514}"),
    ("boxul", "\u{2518}"),
    ("boxvr", "\u{251c}"),
    ("boxvl", "\u{2524}"),
    ("boxhd", "\u{252c}"),
    ("boxhu", "\u{2534}"),
    ("boxvh", "\u{253c}"),
    ("boxH", "\u{2550}"),
    ("boxV", "\u{2551}"),
    ("boxdR", "\u{2552}"),
    ("boxDr", "\u{2553}"),
    ("boxDR", "\u{2554}"),
    ("boxdL", "\u{2555}"),
    ("boxDl", "\u{2556}"),
    ("boxDL", "\u{2557}"),
    ("boxuR", "\u{2558}"),
    ("boxUr", "\u{2559}"),
    ("boxUR", "\u{255a}"),
    ("boxuL", "\u{255b}"),
    ("boxUl", "\u{255c}"),
    ("boxUL", "\u{255d}"),
    ("boxvR", "\u{255e}"),
    ("boxVr", "\u{255f}"),
    ("boxVR", "\u{2560}"),
    ("boxvL", "\u{2561}"),
    ("boxVl", "\u{2562}"),
    ("boxVL", "\u{2563}"),
    ("boxHd", "\u{2564}"),
    ("boxhD", "\u{2565}"),
    ("boxHD", "\u{2566}"),
    ("boxHu", "\u{2567}"),
    ("boxhU", "\u{2568}"),
    ("boxHU", "\u{2569}"),
    ("boxvH", "\u{256a}"),
    ("boxVh", "\u{256b}"),
    ("boxVH", "\u{256c}"),
    ("uhblk", "\u{2580}"),
    ("lhblk", "\u{2584}"),
    ("block", "\u{2588}"),
    ("blk14", "\u{2591}"),
    ("blk12", "\u{2592}"),
    ("blk34", "\u{2593}"),
    ("squ", "\u{25a1}"),
    ("square", "\u{25a1}"),
    ("Square", "\u{25a1}"),
    ("squf", "\u{25aa}"),
    ("squarf", "\u{25aa}"),
    ("blacksquare", "\u{25aa}"),
    ("FilledVerySmallSquare", "\u{25aa}"),
    ("EmptyVerySmallSquare", "\u{25ab}"),
    ("rect", "\u{25ad}"),
    ("marker", "\u{25ae}"),
    ("fltns", "\u{25b1}"),
    ("xutri", "\u{25b3}"),
    ("bigtriangleup", "\u{25b3}"),
    ("utrif", "\u{25b4}"),
    ("blacktriangle", "\u{25b4}"),
    ("utri", "\u{25b5}"),
    ("triangle", "\u{25b5}"),
    ("rtrif", "\u{25b8}"),
    ("blacktriangleright", "\u{25b8}"),
    ("rtri", "\u{25b9}"),
    ("triangleright", "\u{25b9}"),
    ("xdtri", "\u{25bd}"),
    ("bigtriangledown", "\u{25bd}"),
    ("dtrif", "\u{25be}"),
    ("blacktriangledown", "\u{25be}"),
    ("dtri", "\u{25bf}"),
    ("triangledown", "\u{25bf}"),
    ("ltrif", "\u{25c2}"),
    ("blacktriangleleft", "\u{25c2}"),
    ("ltri", "\u{25c3}"),
    ("triangleleft", "\u{25c3}"),
    ("loz", "\u{25ca}"),
    ("lozenge", "\u{25ca}"),
    ("cir", "\u{25cb}"),
    ("tridot", "\u{25ec}"),
    ("xcirc", "\u{25ef}"),
    ("bigcirc", "\u{25ef}"),
    ("ultri", "\u{25f8}"),
    ("urtri", "\u{25f9}"),
    ("lltri", "\u{25fa}"),
    ("EmptySmallSquare", "\u{25fb}"),
    ("FilledSmallSquare", "\u{25fc}"),
    ("starf", "\u{2605}"),
    ("bigstar", "\u{2605}"),
    ("star", "\u{2606}"),
    ("phone", "\u{260e}"),
    ("female", "\u{2640}"),
    ("male", "\u{2642}"),
    ("spades", "\u{2660}"),
    ("spadesuit", "\u{2660}"),
    ("clubs", "\u{2663}"),
    ("clubsuit", "\u{2663}"),
    ("hearts", "\u{2665}"),
    ("heartsuit", "\u{2665}"),
    ("diams", "\u{2666}"),
    ("diamondsuit", "\u{2666}"),
    ("sung", "\u{266a}"),
    ("flat", "\u{266d}"),
    ("natur", "\u{266e}"),
    ("natural", "\u{266e}"),
    ("sharp", "\u{266f}"),
    ("check", "\u{2713}"),
    ("checkmark", "\u{2713}"),
    ("cross", "\u{2717}"),
    ("malt", "\u{2720}"),
    ("maltese", "\u{2720}"),
    ("sext", "\u{2736}"),
    ("VerticalSeparator", "\u{2758}"),
    ("lbbrk", "\u{2772}"),
    ("rbbrk", "\u{2773}"),
    ("bsolhsub", "\u{27c8}"),
    ("suphsol", "\u{27c9}"),
    ("lobrk", "\u{27e6}"),
    ("LeftDoubleBracket", "\u{27e6}"),
    ("robrk", "\u{27e7}"),
    ("RightDoubleBracket", "\u{27e7}"),
    ("lang", "\u{27e8}"),
    ("langle", "\u{27e8}"),
    ("LeftAngleBracket", "\u{27e8}"),
    ("rang", "\u{27e9}"),
    ("rangle", "\u{27e9}"),
    ("RightAngleBracket", "\u{27e9}"),
    ("Lang", "\u{27ea}"),
    ("Rang", "\u{27eb}"),
    ("loang", "\u{27ec}"),
    ("roang", "\u{27ed}"),
    ("xlarr", "\u{27f5}"),
    ("longleftarrow", "\u{27f5}"),
    ("LongLeftArrow", "\u{27f5}"),
    ("xrarr", "\u{27f6}"),
    ("longrightarrow", "\u{27f6}"),
    ("LongRightArrow", "\u{27f6}"),
    ("xharr", "\u{27f7}"),
    ("longleftrightarrow", "\u{27f7}"),
    ("LongLeftRightArrow", "\u{27f7}"),
    ("xlArr", "\u{27f8}"),
    ("Longleftarrow", "\u{27f8}"),
    ("DoubleLongLeftArrow", "\u{27f8}"),
    ("xrArr", "\u{27f9}"),
    ("Longrightarrow", "\u{27f9}"),
    ("DoubleLongRightArrow", "\u{27f9}"),
    ("xhArr", "\u{27fa}"),
    ("Longleftrightarrow", "\u{27fa}"),
    ("DoubleLongLeftRightArrow", "\u{27fa}"),
    ("xmap", "\u{27fc}"),
    ("longmapsto", "\u{27fc}"),
    ("dzigrarr", "\u{27ff}"),
    ("nvlArr", "\u{2902}"),
    ("nvrArr", "\u{2903}"),
    ("nvHarr", "\u{2904}"),
    ("Map", "\u{2905}"),
    ("lbarr", "\u{290c}"),
    ("rbarr", "\u{290d}"),
    ("bkarow", "\u{290d}"),
    ("lBarr", "\u{290e}"),
    ("rBarr", "\u{290f}"),
    ("dbkarow", "\u{290f}"),
    ("RBarr", "\u{2910}"),
    ("drbkarow", "\u{2910}"),
    ("DDotrahd", "\u{2911}"),
    ("UpArrowBar", "\u{2912}"),
    ("DownArrowBar", "\u{2913}"),
    ("Rarrtl", "\u{2916}"),
    ("latail", "\u{2919}"),
    ("ratail", "\u{291a}"),
    ("lAtail", "\u{291b}"),
    ("rAtail", "\u{291c}"),
    ("larrfs", "\u{291d}"),
    ("rarrfs", "\u{291e}"),
    ("larrbfs", "\u{291f}"),
    ("rarrbfs", "\u{2920}"),
    ("nwarhk", "\u{2923}"),
    ("nearhk", "\u{2924}"),
    ("searhk", "\u{2925}"),
    ("hksearow", "\u{2925}"),
    ("swarhk", "\u{2926}"),
    ("hkswarow", "\u{2926}"),
    ("nwnear", "\u{2927}"),
    ("toea", "\u{2928}"),
    ("nesear", "\u{2928}"),
    ("tosa", "\u{2929}"),
    ("seswar", "\u{2929}"),
    ("swnwar", "\u{292a}"),
    ("rarrc", "\u{2933}"),
    ("nrarrc", "\u{2933}\u{338}"),
    ("cudarrr", "\u{2935}"),
    ("ldca", "\u{2936}"),
    ("rdca", "\u{2937}"),
    ("cudarrl", "\u{2938}"),
    ("larrpl", "\u{2939}"),
    ("curarrm", "\u{293c}"),
    ("cularrp", "\u{293d}"),
    ("rarrpl", "\u{2945}"),
    ("harrcir", "\u{2948}"),
    ("Uarrocir", "\u{2949}"),
    ("lurdshar", "\u{294a}"),
    ("ldrushar", "\u{294b}"),
    ("LeftRightVector", "\u{294e}"),
    ("RightUpDownVector", "\u{294f}"),
    ("DownLeftRightVector", "\u{2950}"),
    ("LeftUpDownVector", "\u{2951}"),
    ("LeftVectorBar", "\u{2952}"),
    ("RightVectorBar", "\u{2953}"),
    ("RightUpVectorBar", "\u{2954}"),
    ("RightDownVectorBar", "\u{2955}"),
    ("DownLeftVectorBar", "\u{2956}"),
    ("DownRightVectorBar", "\u{2957}"),
    ("LeftUpVectorBar", "\u{2958}"),
    ("LeftDownVectorBar", "\u{2959}"),
    ("LeftTeeVector", "\u{295a}"),
    ("RightTeeVector", "\u{295b}"),
    ("RightUpTeeVector", "\u{295c}"),
    ("RightDownTeeVector", "\u{295d}"),
    ("DownLeftTeeVector", "\u{295e}"),
    ("DownRightTeeVector", "\u{295f}"),
    ("LeftUpTeeVector", "\u{2960}"),
    ("LeftDownTeeVector", "\u{2961}"),
    ("lHar", "\u{2962}"),
    ("uHar", "\u{2963}"),
    ("rHar", "\u{2964}"),
    ("dHar", "\u{2965}"),
    ("luruhar", "\u{2966}"),
    ("ldrdhar", "\u{2967}"),
    ("ruluhar", "\u{2968}"),
    ("rdldhar", "\u{2969}"),
    ("lharul", "\u{296a}"),
    ("llhard", "\u{296b}"),
    ("rharul", "\u{296c}"),
    ("lrhard", "\u{296d}"),
    ("udhar", "\u{296e}"),
    ("UpEquilibrium", "\u{296e}"),
    ("duhar", "\u{296f}"),
    ("ReverseUpEquilibrium", "\u{296f}"),
    ("RoundImplies", "\u{2970}"),
    ("erarr", "\u{2971}"),
    ("simrarr", "\u{2972}"),
    ("larrsim", "\u{2973}"),
    ("rarrsim", "\u{2974}"),
    ("rarrap", "\u{2975}"),
    ("ltlarr", "\u{2976}"),
    ("gtrarr", "\u{2978}"),
    ("subrarr", "\u{2979}"),
    ("suplarr", "\u{297b}"),
    ("lfisht", "\u{297c}"),
    ("rfisht", "\u{297d}"),
    ("ufisht", "\u{297e}"),
    ("dfisht", "\u{297f}"),
    ("lopar", "\u{2985}"),
    ("ropar", "\u{2986}"),
    ("lbrke", "\u{298b}"),
    ("rbrke", "\u{298c}"),
    ("lbrkslu", "\u{298d}"),
    ("rbrksld", "\u{298e}"),
    ("lbrksld", "\u{298f}"),
    ("rbrkslu", "\u{2990}"),
    ("langd", "\u{2991}"),
    ("rangd", "\u{2992}"),
    ("lparlt", "\u{2993}"),
    ("rpargt", "\u{2994}"),
    ("gtlPar", "\u{2995}"),
    ("ltrPar", "\u{2996}"),
    ("vzigzag", "\u{299a}"),
    ("vangrt", "\u{299c}"),
    ("angrtvbd", "\u{299d}"),
    ("ange", "\u{29a4}"),
    ("range", "\u{29a5}"),
    ("dwangle", "\u{29a6}"),
    ("uwangle", "\u{29a7}"),
    ("angmsdaa", "\u{29a8}"),
    ("angmsdab", "\u{29a9}"),
    ("angmsdac", "\u{29aa}"),
    ("angmsdad", "\u{29ab}"),
    ("angmsdae", "\u{29ac}"),
    ("angmsdaf", "\u{29ad}"),
    ("angmsdag", "\u{29ae}"),
    ("angmsdah", "\u{29af}"),
    ("bemptyv", "\u{29b0}"),
    ("demptyv", "\u{29b1}"),
    ("cemptyv", "\u{29b2}"),
    ("raemptyv", "\u{29b3}"),
    ("laemptyv", "\u{29b4}"),
    ("ohbar", "\u{29b5}"),
    ("omid", "\u{29b6}"),
    ("opar", "\u{29b7}"),
    ("operp", "\u{29b9}"),
    ("olcross", "\u{29bb}"),
    ("odsold", "\u{29bc}"),
    ("olcir", "\u{29be}"),
    ("ofcir", "\u{29bf}"),
    ("olt", "\u{29c0}"),
    ("ogt", "\u{29c1}"),
    ("cirscir", "\u{29c2}"),
    ("cirE", "\u{29c3}"),
    ("solb", "\u{29c4}"),
    ("bsolb", "\u{29c5}"),
    ("boxbox", "\u{29c9}"),
    ("trisb", "\u{29cd}"),
    ("rtriltri", "\u{29ce}"),
    ("LeftTriangleBar", "\u{29cf}"),
    ("NotLeftTriangleBar", "\u{29cf}\u{338}"),
    ("RightTriangleBar", "\u{29d0}"),
    ("NotRightTriangleBar", "\u{29d0}\u{338}"),
    ("iinfin", "\u{29dc}"),
    ("infintie", "\u{29dd}"),
    ("nvinfin", "\u{29de}"),
    ("eparsl", "\u{29e3}"),
    ("smeparsl", "\u{29e4}"),
    ("eqvparsl", "\u{29e5}"),
    ("lozf", "\u{29eb}"),
    ("blacklozenge", "\u{29eb}"),
    ("RuleDelayed", "\u{29f4}"),
    ("dsol", "\u{29f6}"),
    ("xodot", "\u{2a00}"),
    ("bigodot", "\u{2a00}"),
    ("xoplus", "\u{2a01}"),
    ("bigoplus", "\u{2a01}"),
    ("xotime", "\u{2a02}"),
    ("bigotimes", "\u{2a02}"),
    ("xuplus", "\u{2a04}"),
    ("biguplus", "\u{2a04}"),
    ("xsqcup", "\u{2a06}"),
    ("bigsqcup", "\u{2a06}"),
    ("qint", "\u{2a0c}"),
    ("iiiint", "\u{2a0c}"),
    ("fpartint", "\u{2a0d}"),
    ("cirfnint", "\u{2a10}"),
    ("awint", "\u{2a11}"),
    ("rppolint", "\u{2a12}"),
    ("scpolint", "\u{2a13}"),
    ("npolint", "\u{2a14}"),
    ("pointint", "\u{2a15}"),
    ("quatint", "\u{2a16}"),
    ("intlarhk", "\u{2a17}"),
    ("pluscir", "\u{2a22}"),
    ("plusacir", "\u{2a23}"),
    ("simplus", "\u{2a24}"),
    ("plusdu", "\u{2a25}"),
    ("plussim", "\u{2a26}"),
    ("plustwo", "\u{2a27}"),
    ("mcomma", "\u{2a29}"),
    ("minusdu", "\u{2a2a}"),
    ("loplus", "\u{2a2d}"),
    ("roplus", "\u{2a2e}"),
    ("Cross", "\u{2a2f}"),
    ("timesd", "\u{2a30}"),
    ("timesbar", "\u{2a31}"),
    ("smashp", "\u{2a33}"),
    ("lotimes", "\u{2a34}"),
    ("rotimes", "\u{2a35}"),
    ("otimesas", "\u{2a36}"),
    ("Otimes", "\u{2a37}"),
    ("odiv", "\u{2a38}"),
    ("triplus", "\u{2a39}"),
    ("triminus", "\u{2a3a}"),
    ("tritime", "\u{2a3b}"),
    ("iprod", "\u{2a3c}"),
    ("intprod", "\u{2a3c}"),
    ("amalg", "\u{2a3f}"),
    ("capdot", "\u{2a40}"),
    ("ncup", "\u{2a42}"),
    ("ncap", "\u{2a43}"),
    ("capand", "\u{2a44}"),
    ("cupor", "\u{2a45}"),
    ("cupcap", "\u{2a46}"),
    ("capcup", "\u{2a47}"),
    ("cupbrcap", "\u{2a48}"),
    ("capbrcup", "\u{2a49}"),
    ("cupcup", "\u{2a4a}"),
    ("capcap", "\u{2a4b}"),
    ("ccups", "\u{2a4c}"),
    ("ccaps", "\u{2a4d}"),
    ("ccupssm", "\u{2a50}"),
    ("And", "\u{2a53}"),
    ("Or", "\u{2a54}"),
    ("andand", "\u{2a55}"),
    ("oror", "\u{2a56}"),
    ("orslope", "\u{2a57}"),
    ("andslope", "\u{2a58}"),
    ("andv", "\u{2a5a}"),
    ("orv", "\u{2a5b}"),
    ("andd", "\u{2a5c}"),
    ("ord", "\u{2a5d}"),
    ("wedbar", "\u{2a5f}"),
    ("sdote", "\u{2a66}"),
    ("simdot", "\u{2a6a}"),
    ("congdot", "\u{2a6d}"),
    ("ncongdot", "\u{2a6d}\u{338}"),
    ("easter", "\u{2a6e}"),
    ("apacir", "\u{2a6f}"),
    ("apE", "\u{2a70}"),
    ("napE", "\u{2a70}\u{338}"),
    ("eplus", "\u{2a71}"),
    ("pluse", "\u{2a72}"),
    ("Esim", "\u{2a73}"),
    ("Colone", "\u{2a74}"),
    ("Equal", "\u{2a75}"),
    ("eDDot", "\u{2a77}"),
    ("ddotseq", "\u{2a77}"),
    ("equivDD", "\u{2a78}"),
    ("ltcir", "\u{2a79}"),
    ("gtcir", "\u{2a7a}"),
    ("ltquest", "\u{2a7b}"),
    ("gtquest", "\u{2a7c}"),
    ("les", "\u{2a7d}"),
    ("leqslant", "\u{2a7d}"),
    ("LessSlantEqual", "\u{2a7d}"),
    ("nles", "\u{2a7d}\u{338}"),
    ("nleqslant", "\u{2a7d}\u{338}"),
    ("NotLessSlantEqual", "\u{2a7d}\u{338}"),
    ("ges", "\u{2a7e}"),
    ("geqslant", "\u{2a7e}"),
    ("GreaterSlantEqual", "\u{2a7e}"),
    ("nges", "\u{2a7e}\u{338}"),
    ("ngeqslant", "\u{2a7e}\u{338}"),
    ("NotGreaterSlantEqual", "\u{2a7e}\u{338}"),
    ("lesdot", "\u{2a7f}"),
    ("gesdot", "\u{2a80}"),
    ("lesdoto", "\u{2a81}"),
    ("gesdoto", "\u{2a82}"),
    ("lesdotor", "\u{2a83}"),
    ("gesdotol", "\u{2a84}"),
    ("lap", "\u{2a85}"),
    ("lessapprox", "\u{2a85}"),
    ("gap", "\u{2a86}"),
    ("gtrapprox", "\u{2a86}"),
    ("lne", "\u{2a87}"),
    ("lneq", "\u{2a87}"),
    ("gne", "\u{2a88}"),
    ("gneq", "\u{2a88}"),
    ("lnap", "\u{2a89}"),
    ("lnapprox", "\u{2a89}"),
    ("gnap", "\u{2a8a}"),
    ("gnapprox", "\u{2a8a}"),
    ("lEg", "\u{2a8b}"),
    ("lesseqqgtr", "\u{2a8b}"),
    ("gEl", "\u{2a8c}"),
    ("gtreqqless", "\u{2a8c}"),
    ("lsime", "\u{2a8d}"),
    ("gsime", "\u{2a8e}"),
    ("lsimg", "\u{2a8f}"),
    ("gsiml", "\u{2a90}"),
    ("lgE", "\u{2a91}"),
    ("glE", "\u{2a92}"),
    ("lesges", "\u{2a93}"),
    ("gesles", "\u{2a94}"),
    ("els", "\u{2a95}"),
    ("eqslantless", "\u{2a95}"),
    ("egs", "\u{2a96}"),
    ("eqslantgtr", "\u{2a96}"),
    ("elsdot", "\u{2a97}"),
    ("egsdot", "\u{2a98}"),
    ("el", "\u{2a99}"),
    ("eg", "\u{2a9a}"),
    ("siml", "\u{2a9d}"),
    ("simg", "\u{2a9e}"),
    ("simlE", "\u{2a9f}"),
    ("simgE", "\u{2aa0}"),
    ("LessLess", "\u{2aa1}"),
    ("NotNestedLessLess", "\u{2aa1}\u{338}"),
    ("GreaterGreater", "\u{2aa2}"),
    ("NotNestedGreaterGreater", "\u{2aa2}\u{338}"),
    ("glj", "\u{2aa4}"),
    ("gla", "\u{2aa5}"),
    ("ltcc", "\u{2aa6}"),
    ("gtcc", "\u{2aa7}"),
    ("lescc", "\u{2aa8}"),
    ("gescc", "\u{2aa9}"),
    ("smt", "\u{2aaa}"),
    ("lat", "\u{2aab}"),
    ("smte", "\u{2aac}"),
    ("smtes", "\u{2aac}\u{fe00}"),
    ("late", "\u{2aad}"),
    ("lates", "\u{2aad}\u{fe00}"),
    ("bumpE", "\u{2aae}"),
    ("pre", "\u{2aaf}"),
    ("preceq", "\u{2aaf}"),
    ("PrecedesEqual", "\u{2aaf}"),
    ("npre", "\u{2aaf}\u{338}"),
    ("npreceq", "\u{2aaf}\u{338}"),
    ("NotPrecedesEqual", "\u{2aaf}\u{338}"),
    ("sce", "\u{2ab0}"),
    ("succeq", "\u{2ab0}"),
    ("SucceedsEqual", "\u{2ab0}"),
    ("nsce", "\u{2ab0}\u{338}"),
    ("nsucceq", "\u{2ab0}\u{338}"),
    ("NotSucceedsEqual", "\u{2ab0}\u{338}"),
    ("prE", "\u{2ab3}"),
    ("scE", "\u{2ab4}"),
    ("prnE", "\u{2ab5}"),
    ("precneqq", "\u{2ab5}"),
    ("scnE", "\u{2ab6}"),
    ("succneqq", "\u{2ab6}"),
    ("prap", "\u{2ab7}"),
    ("precapprox", "\u{2ab7}"),
    ("scap", "\u{2ab8}"),
    ("succapprox", "\u{2ab8}"),
    ("prnap", "\u{2ab9}"),
    ("precnapprox", "\u{2ab9}"),
    ("scnap", "\u{2aba}"),
    ("succnapprox", "\u{2aba}"),
    ("Pr", "\u{2abb}"),
    ("Sc", "\u{2abc}"),
    ("subdot", "\u{2abd}"),
    ("supdot", "\u{2abe}"),
    ("subplus", "\u{2abf}"),
    ("supplus", "\u{2ac0}"),
    ("submult", "\u{2ac1}"),
    ("supmult", "\u{2ac2}"),
    ("subedot", "\u{2ac3}"),
    ("supedot", "\u{2ac4}"),
    ("subE", "\u{2ac5}"),
    ("subseteqq", "\u{2ac5}"),
    ("nsubE", "\u{2ac5}\u{338}"),
    ("nsubseteqq", "\u{2ac5}\u{338}"),
    ("supE", "\u{2ac6}"),
    ("supseteqq", "\u{2ac6}"),
    ("nsupE", "\u{2ac6}\u{338}"),
    ("nsupseteqq", "\u{2ac6}\u{338}"),
    ("subsim", "\u{2ac7}"),
    ("supsim", "\u{2ac8}"),
    ("subnE", "\u{2acb}"),
    ("subsetneqq", "\u{2acb}"),
    ("vsubnE", "\u{2acb}\u{fe00}"),
    ("varsubsetneqq", "\u{2acb}\u{fe00}"),
    ("supnE", "\u{2acc}"),
    ("supsetneqq", "\u{2acc}"),
    ("vsupnE", "\u{2acc}\u{fe00}"),
    ("varsupsetneqq", "\u{2acc}\u{fe00}"),
    ("csub", "\u{2acf}"),
    ("csup", "\u{2ad0}"),
    ("csube", "\u{2ad1}"),
    ("csupe", "\u{2ad2}"),
    ("subsup", "\u{2ad3}"),
    ("supsub", "\u{2ad4}"),
    ("subsub", "\u{2ad5}"),
    ("supsup", "\u{2ad6}"),
    ("suphsub", "\u{2ad7}"),
    ("supdsub", "\u{2ad8}"),
    ("forkv", "\u{2ad9}"),
    ("topfork", "\u{2ada}"),
    ("mlcp", "\u{2adb}"),
    ("Dashv", "\u{2ae4}"),
    ("DoubleLeftTee", "\u{2ae4}"),
    ("Vdashl", "\u{2ae6}"),
    ("Barv", "\u{2ae7}"),
    ("vBar", "\u{2ae8}"),
    ("vBarv", "\u{2ae9}"),
    ("Vbar", "\u{2aeb}"),
    ("Not", "\u{2aec}"),
    ("bNot", "\u{2aed}"),
    ("rnmid", "\u{2aee}"),
    ("cirmid", "\u{2aef}"),
    ("midcir", "\u{2af0}"),
    ("topcir", "\u{2af1}"),
    ("nhpar", "\u{2af2}"),
    ("parsim", "\u{2af3}"),
    ("parsl", "\u{2afd}"),
    ("nparsl", "\u{2afd}\u{20e5}"),
    ("fflig", "\u{fb00}"),
    ("filig", "\u{fb01}"),
    ("fllig", "\u{fb02}"),
    ("ffilig", "\u{fb03}"),
    ("ffllig", "\u{fb04}"),
    ("Ascr", "\u{1d49c}"),
    ("Cscr", "\u{1d49e}"),
    ("Dscr", "\u{1d49f}"),
    ("Gscr", "\u{1d4a2}"),
    ("Jscr", "\u{1d4a5}"),
    ("Kscr", "\u{1d4a6}"),
    ("Nscr", "\u{1d4a9}"),
    ("Oscr", "\u{1d4aa}"),
    ("Pscr", "\u{1d4ab}"),
    ("Qscr", "\u{1d4ac}"),
    ("Sscr", "\u{1d4ae}"),
    ("Tscr", "\u{1d4af}"),
    ("Uscr", "\u{1d4b0}"),
    ("Vscr", "\u{1d4b1}"),
    ("Wscr", "\u{1d4b2}"),
    ("Xscr", "\u{1d4b3}"),
    ("Yscr", "\u{1d4b4}"),
    ("Zscr", "\u{1d4b5}"),
    ("ascr", "\u{1d4b6}"),
    ("bscr", "\u{1d4b7}"),
    ("cscr", "\u{1d4b8}"),
    ("dscr", "\u{1d4b9}"),
    ("fscr", "\u{1d4bb}"),
    ("hscr", "\u{1d4bd}"),
    ("iscr", "\u{1d4be}"),
    ("jscr", "\u{1d4bf}"),
    ("kscr", "\u{1d4c0}"),
    ("lscr", "\u{1d4c1}"),
    ("mscr", "\u{1d4c2}"),
    ("nscr", "\u{1d4c3}"),
    ("pscr", "\u{1d4c5}"),
    ("qscr", "\u{1d4c6}"),
    ("rscr", "\u{1d4c7}"),
    ("sscr", "\u{1d4c8}"),
    ("tscr", "\u{1d4c9}"),
    ("uscr", "\u{1d4ca}"),
    ("vscr", "\u{1d4cb}"),
    ("wscr", "\u{1d4cc}"),
    ("xscr", "\u{1d4cd}"),
    ("yscr", "\u{1d4ce}"),
    ("zscr", "\u{1d4cf}"),
    ("Afr", "\u{1d504}"),
    ("Bfr", "\u{1d505}"),
    ("Dfr", "\u{1d507}"),
    ("Efr", "\u{1d508}"),
    ("Ffr", "\u{1d509}"),
    ("Gfr", "\u{1d50a}"),
    ("Jfr", "\u{1d50d}"),
    ("Kfr", "\u{1d50e}"),
    ("Lfr", "\u{1d50f}"),
    ("Mfr", "\u{1d510}"),
    ("Nfr", "\u{1d511}"),
    ("Ofr", "\u{1d512}"),
    ("Pfr", "\u{1d513}"),
    ("Qfr", "\u{1d514}"),
    ("Sfr", "\u{1d516}"),
    ("Tfr", "\u{1d517}"),
    ("Ufr", "\u{1d518}"),
    ("Vfr", "\u{1d519}"),
    ("Wfr", "\u{1d51a}"),
    ("Xfr", "\u{1d51b}"),
    ("Yfr", "\u{1d51c}"),
    ("afr", "\u{1d51e}"),
    ("bfr", "\u{1d51f}"),
    ("cfr", "\u{1d520}"),
    ("dfr", "\u{1d521}"),
    ("efr", "\u{1d522}"),
    ("ffr", "\u{1d523}"),
    ("gfr", "\u{1d524}"),
    ("hfr", "\u{1d525}"),
    ("ifr", "\u{1d526}"),
    ("jfr", "\u{1d527}"),
    ("kfr", "\u{1d528}"),
    ("lfr", "\u{1d529}"),
    ("mfr", "\u{1d52a}"),
    ("nfr", "\u{1d52b}"),
    ("ofr", "\u{1d52c}"),
    ("pfr", "\u{1d52d}"),
    ("qfr", "\u{1d52e}"),
    ("rfr", "\u{1d52f}"),
    ("sfr", "\u{1d530}"),
    ("tfr", "\u{1d531}"),
    ("ufr", "\u{1d532}"),
    ("vfr", "\u{1d533}"),
    ("wfr", "\u{1d534}"),
    ("xfr", "\u{1d535}"),
    ("yfr", "\u{1d536}"),
    ("zfr", "\u{1d537}"),
    ("Aopf", "\u{1d538}"),
    ("Bopf", "\u{1d539}"),
    ("Dopf", "\u{1d53b}"),
    ("Eopf", "\u{1d53c}"),
    ("Fopf", "\u{1d53d}"),
    ("Gopf", "\u{1d53e}"),
    ("Iopf", "\u{1d540}"),
    ("Jopf", "\u{1d541}"),
    ("Kopf", "\u{1d542}"),
    ("Lopf", "\u{1d543}"),
    ("Mopf", "\u{1d544}"),
    ("Oopf", "\u{1d546}"),
    ("Sopf", "\u{1d54a}"),
    ("Topf", "\u{1d54b}"),
    ("Uopf", "\u{1d54c}"),
    ("Vopf", "\u{1d54d}"),
    ("Wopf", "\u{1d54e}"),
    ("Xopf", "\u{1d54f}"),
    ("Yopf", "\u{1d550}"),
    ("aopf", "\u{1d552}"),
    ("bopf", "\u{1d553}"),
    ("copf", "\u{1d554}"),
    ("dopf", "\u{1d555}"),
    ("eopf", "\u{1d556}"),
    ("fopf", "\u{1d557}"),
    ("gopf", "\u{1d558}"),
    ("hopf", "\u{1d559}"),
    ("iopf", "\u{1d55a}"),
    ("jopf", "\u{1d55b}"),
    ("kopf", "\u{1d55c}"),
    ("lopf", "\u{1d55d}"),
    ("mopf", "\u{1d55e}"),
    ("nopf", "\u{1d55f}"),
    ("oopf", "\u{1d560}"),
    ("popf", "\u{1d561}"),
    ("qopf", "\u{1d562}"),
    ("ropf", "\u{1d563}"),
    ("sopf", "\u{1d564}"),
    ("topf", "\u{1d565}"),
    ("uopf", "\u{1d566}"),
    ("vopf", "\u{1d567}"),
    ("wopf", "\u{1d568}"),
    ("xopf", "\u{1d569}"),
    ("yopf", "\u{1d56a}"),
    ("zopf", "\u{1d56b}"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTITIES.iter().copied().collect());

static BY_TEXT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &(name, text) in ENTITIES {
        map.entry(text).or_insert(name);
    }
    map
});

/// Expansion for a reference name (without `&` and `;`).
pub fn lookup_name(name: &str) -> Option<&'static str> {
    BY_NAME.get(name).copied()
}

/// Preferred reference name for a single character.
pub fn lookup_char(c: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    BY_TEXT.get(&*c.encode_utf8(&mut buf)).copied()
}

/// Encode text the way an "extensive" HTML entity encoder does: every character with a
/// named reference becomes `&name;`, remaining non-ASCII characters become decimal
/// references, and printable ASCII passes through.
///
/// Two-code-point references (`&nvlt;`, `&NotEqualTilde;`) are preferred over their
/// parts. `&fjlig;` is the one all-ASCII pair and is never produced.
pub fn encode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if let Some(&(next_start, next)) = chars.peek() {
            let pair = &text[start..next_start + next.len_utf8()];
            if !pair.is_ascii()
                && let Some(name) = BY_TEXT.get(pair)
            {
                push_reference(&mut out, name);
                chars.next();
                continue;
            }
        }

        if let Some(name) = lookup_char(c) {
            push_reference(&mut out, name);
        } else if c.is_ascii() && !c.is_ascii_control() {
            out.push(c);
        } else {
            out.push_str(&format!("&#{};", c as u32));
        }
    }
    out
}

fn push_reference(out: &mut String, name: &str) {
    out.push('&');
    out.push_str(name);
    out.push(';');
}
